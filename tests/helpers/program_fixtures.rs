//! Fixture programs built the way a front-end would build them.

use symsearch::base::SourceSpan;
use symsearch::hir::{Program, ProgramBuilder, SymbolId, SymbolKind, TypeId};

// ============================================================================
// net.Listen
// ============================================================================

/// Source of `app/main.go`, matching the spans recorded by [`net_fixture`].
pub const MAIN_GO: &str = "package main

import \"net\"

func main() {
\tln, _ := net.Listen(\"tcp\", \":0\")
\tListen()
\t_ = ln
}
";

/// Package `net` declaring `Listen`, `Listener` and `TCPListener`, package
/// `app` calling `net.Listen` once and its own `Listen` once, plus a
/// `broken` package with errors that also calls `net.Listen`.
pub struct NetFixture {
    pub program: Program,
    pub listen: SymbolId,
    pub listener_close: SymbolId,
    pub tcp_close: SymbolId,
    pub app_listen: SymbolId,
}

/// Build the `net` fixture with every file path under `root`.
pub fn net_fixture(root: &str) -> NetFixture {
    let mut b = ProgramBuilder::new();
    let net = b.package("net", "net");
    let app = b.package("app", "main");
    let broken = b.package("broken", "broken");
    b.package_error(broken, "broken/b.go:3:1: expected declaration, found 'if'");

    let net_go = b.file(&format!("{root}/net/net.go"), false);
    let main_go = b.file(&format!("{root}/app/main.go"), false);
    let main_test_go = b.file(&format!("{root}/app/main_test.go"), true);
    let broken_go = b.file(&format!("{root}/broken/b.go"), false);

    let string = b.basic("string");
    let error = b.basic("error");
    let int = b.basic("int");
    let close_sig = b.signature(vec![], vec![error], false);
    let void = b.signature(vec![], vec![], false);

    let iface = b.interface_type(net, &[("Close", close_sig)], &[]);
    let (listener, listener_ty) = b.declare_type(net, "Listener", iface);

    let listen_sig = b.signature(vec![string, string], vec![listener_ty, error], false);
    let listen = b.declare_func(net, "Listen", listen_sig);

    let st = b.struct_type(net, &[("fd", int, false)]);
    let (tcp, tcp_ty) = b.declare_type(net, "TCPListener", st);
    let tcp_close = b.declare_method(tcp_ty, true, "Close", close_sig);

    b.record_def(net, listener, SourceSpan::identifier(net_go, 20, 2, 5, 8));
    b.record_def(net, listen, SourceSpan::identifier(net_go, 80, 6, 5, 6));
    b.record_def(net, tcp, SourceSpan::identifier(net_go, 140, 10, 5, 11));
    b.record_def(net, tcp_close, SourceSpan::identifier(net_go, 190, 14, 25, 5));

    let main = b.declare_func(app, "main", void);
    let app_listen = b.declare_func(app, "Listen", void);
    b.record_def(app, main, SourceSpan::identifier(main_go, 33, 4, 5, 4));
    b.record_use(app, listen, SourceSpan::identifier(main_go, 56, 5, 14, 6));
    b.record_use(app, app_listen, SourceSpan::identifier(main_go, 77, 6, 1, 6));
    b.record_use(app, listen, SourceSpan::identifier(main_test_go, 60, 5, 14, 6));

    b.record_use(broken, listen, SourceSpan::identifier(broken_go, 30, 2, 6, 6));

    let program = b.build();
    let listener_close = listener_method(&program, listener_ty);
    NetFixture {
        program,
        listen,
        listener_close,
        tcp_close,
        app_listen,
    }
}

fn listener_method(program: &Program, listener_ty: TypeId) -> SymbolId {
    match program.lookup_field_or_method(listener_ty, "Close").symbol() {
        Some(symbol) => symbol,
        None => panic!("Listener.Close must be declared"),
    }
}

// ============================================================================
// Foo / Bar
// ============================================================================

/// Source of `p/p.go`.
pub const P_GO: &str = "package p

func Foo() {}

func Bar() {
\tFoo()
\tFoo()
}
";

/// Package `p` where `Bar` calls `Foo` twice and nothing calls `Bar`.
pub fn foo_bar_program(root: &str) -> Program {
    let mut b = ProgramBuilder::new();
    let p = b.package("p", "p");
    let file = b.file(&format!("{root}/p/p.go"), false);
    let void = b.signature(vec![], vec![], false);

    let foo = b.declare_func(p, "Foo", void);
    let bar = b.declare_func(p, "Bar", void);
    b.record_def(p, foo, SourceSpan::identifier(file, 16, 2, 5, 3));
    b.record_def(p, bar, SourceSpan::identifier(file, 31, 4, 5, 3));
    b.record_use(p, foo, SourceSpan::identifier(file, 40, 5, 1, 3));
    b.record_use(p, foo, SourceSpan::identifier(file, 47, 6, 1, 3));
    b.build()
}

// ============================================================================
// Interface satisfaction
// ============================================================================

/// Packages `shapes` and `geo` with interfaces and the methods that may or
/// may not implement them, plus `broken` which has errors.
///
/// ```text
/// shapes: type Shape interface { Area() float64 }
///         type Square struct{ side float64 }
///         func (Square) Area() float64         // satisfies Shape
///         func (Square) Side() float64         // same signature as Area
///         func (*Square) Scale(f float64)      // no interface
///         func (Square) Perimeter() int        // only geo.measurer, unexported
///         func NewSquare(side float64) Square
/// geo:    type measurer interface { Perimeter() int }
///         type Any interface{}
///         type circle struct{ radius float64 }
///         func (circle) Area() float64         // satisfies shapes.Shape
/// broken: func Orphan()                        // package has errors
/// ```
pub fn shapes_program() -> Program {
    let mut b = ProgramBuilder::new();
    let shapes = b.package("example.com/shapes", "shapes");
    let geo = b.package("example.com/geo", "geo");
    let broken = b.package("example.com/broken", "broken");
    b.package_error(broken, "broken/b.go:1:1: undefined: shapes.Circle");

    let shapes_go = b.file("/src/shapes/shapes.go", false);
    let geo_go = b.file("/src/geo/geo.go", false);
    let broken_go = b.file("/src/broken/b.go", false);

    let float64 = b.basic("float64");
    let int = b.basic("int");
    let area_sig = b.signature(vec![], vec![float64], false);
    let perimeter_sig = b.signature(vec![], vec![int], false);
    let scale_sig = b.signature(vec![float64], vec![], false);
    let void = b.signature(vec![], vec![], false);

    let shape_iface = b.interface_type(shapes, &[("Area", area_sig)], &[]);
    let (shape, _) = b.declare_type(shapes, "Shape", shape_iface);
    let square_st = b.struct_type(shapes, &[("side", float64, false)]);
    let (square, square_ty) = b.declare_type(shapes, "Square", square_st);
    let area = b.declare_method(square_ty, false, "Area", area_sig);
    let side = b.declare_method(square_ty, false, "Side", area_sig);
    let scale = b.declare_method(square_ty, true, "Scale", scale_sig);
    let perimeter = b.declare_method(square_ty, false, "Perimeter", perimeter_sig);
    let new_sig = b.signature(vec![float64], vec![square_ty], false);
    let new_square = b.declare_func(shapes, "NewSquare", new_sig);

    for (offset, symbol) in [shape, square, area, side, scale, perimeter, new_square]
        .into_iter()
        .enumerate()
    {
        let offset = offset as u32;
        b.record_def(shapes, symbol, SourceSpan::identifier(shapes_go, offset * 40, offset * 3, 5, 4));
    }
    b.record_use(shapes, scale, SourceSpan::identifier(shapes_go, 400, 30, 3, 5));

    let measurer_iface = b.interface_type(geo, &[("Perimeter", perimeter_sig)], &[]);
    let (measurer, _) = b.declare_type(geo, "measurer", measurer_iface);
    let any_iface = b.interface_type(geo, &[], &[]);
    let (any, _) = b.declare_type(geo, "Any", any_iface);
    let circle_st = b.struct_type(geo, &[("radius", float64, false)]);
    let (circle, circle_ty) = b.declare_type(geo, "circle", circle_st);
    let circle_area = b.declare_method(circle_ty, false, "Area", area_sig);
    b.record_def(geo, measurer, SourceSpan::identifier(geo_go, 10, 1, 5, 8));
    b.record_def(geo, any, SourceSpan::identifier(geo_go, 60, 4, 5, 3));
    b.record_def(geo, circle, SourceSpan::identifier(geo_go, 90, 6, 5, 6));
    b.record_def(geo, circle_area, SourceSpan::identifier(geo_go, 140, 9, 16, 4));
    b.record_use(geo, new_square, SourceSpan::identifier(geo_go, 200, 12, 12, 9));

    let orphan = b.declare_func(broken, "Orphan", void);
    b.record_def(broken, orphan, SourceSpan::identifier(broken_go, 20, 2, 5, 6));
    b.record_use(broken, area, SourceSpan::identifier(broken_go, 50, 4, 3, 4));
    b.record_use(broken, new_square, SourceSpan::identifier(broken_go, 70, 5, 3, 9));

    b.build()
}

/// Packages `a` and `c` each declaring a `Load` function; `c` calls both,
/// and also has a label named `Load`.
pub fn same_name_program() -> Program {
    let mut b = ProgramBuilder::new();
    let a = b.package("a", "a");
    let c = b.package("c", "c");
    let a_go = b.file("/src/a/a.go", false);
    let c_go = b.file("/src/c/c.go", false);
    let void = b.signature(vec![], vec![], false);

    let a_load = b.declare_func(a, "Load", void);
    let c_load = b.declare_func(c, "Load", void);
    b.record_def(a, a_load, SourceSpan::identifier(a_go, 10, 1, 5, 4));
    b.record_def(c, c_load, SourceSpan::identifier(c_go, 10, 1, 5, 4));
    b.record_use(a, a_load, SourceSpan::identifier(a_go, 40, 4, 1, 4));
    b.record_use(c, c_load, SourceSpan::identifier(c_go, 40, 4, 1, 4));
    b.record_use(c, a_load, SourceSpan::identifier(c_go, 60, 6, 3, 4));

    let label = b.local(c, "Load", SymbolKind::Label, void);
    b.record_use(c, label, SourceSpan::identifier(c_go, 80, 8, 7, 4));
    b.build()
}

/// Package `p` where `T.Do` is only reachable through a parameter of
/// anonymous interface type, and `T.Skip` through nothing.
///
/// ```text
/// p: type T struct{}
///    func (T) Do()
///    func (T) Skip(n int)
///    func Run(x interface{ Do() }) { x.Do() }
/// ```
pub fn dispatch_program() -> Program {
    let mut b = ProgramBuilder::new();
    let p = b.package("p", "p");
    let file = b.file("/src/p/p.go", false);
    let int = b.basic("int");
    let void = b.signature(vec![], vec![], false);
    let skip_sig = b.signature(vec![int], vec![], false);

    let st = b.struct_type(p, &[]);
    let (t, t_ty) = b.declare_type(p, "T", st);
    let run_do = b.declare_method(t_ty, false, "Do", void);
    let skip = b.declare_method(t_ty, false, "Skip", skip_sig);

    let doer = b.interface_type(p, &[("Do", void)], &[]);
    let run_sig = b.signature(vec![doer], vec![], false);
    let run = b.declare_func(p, "Run", run_sig);
    let x = b.local(p, "x", SymbolKind::Var, doer);

    b.record_def(p, t, SourceSpan::identifier(file, 15, 2, 5, 1));
    b.record_def(p, run_do, SourceSpan::identifier(file, 37, 3, 9, 2));
    b.record_def(p, skip, SourceSpan::identifier(file, 54, 4, 9, 4));
    b.record_def(p, run, SourceSpan::identifier(file, 78, 5, 5, 3));
    b.record_def(p, x, SourceSpan::identifier(file, 82, 5, 9, 1));
    b.build()
}
