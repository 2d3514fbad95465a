//! Field and method lookup through embedded structs.

use symsearch::hir::{LookupResult, Program, ProgramBuilder, ResolveError, Resolver, TypeId};

struct Embedding {
    program: Program,
    outer: TypeId,
    outer_ptr: TypeId,
}

/// ```text
/// type Inner struct { Count int }
/// func (*Inner) Reset()
/// type Outer struct { *Inner; Name string }
/// type Left struct { ID int }
/// type Right struct { ID int }
/// type Both struct { Left; Right }
/// type Shadow struct { Inner; Count string }
/// ```
fn embedding_program() -> Embedding {
    let mut b = ProgramBuilder::new();
    let p = b.package("p", "p");
    let int = b.basic("int");
    let string = b.basic("string");
    let void = b.signature(vec![], vec![], false);

    let inner_st = b.struct_type(p, &[("Count", int, false)]);
    let (_, inner) = b.declare_type(p, "Inner", inner_st);
    b.declare_method(inner, true, "Reset", void);

    let inner_ptr = b.pointer(inner);
    let outer_st = b.struct_type(p, &[("Inner", inner_ptr, true), ("Name", string, false)]);
    let (_, outer) = b.declare_type(p, "Outer", outer_st);
    let outer_ptr = b.pointer(outer);

    let left_st = b.struct_type(p, &[("ID", int, false)]);
    let (_, left) = b.declare_type(p, "Left", left_st);
    let right_st = b.struct_type(p, &[("ID", int, false)]);
    let (_, right) = b.declare_type(p, "Right", right_st);
    let both_st = b.struct_type(p, &[("Left", left, true), ("Right", right, true)]);
    b.declare_type(p, "Both", both_st);

    let shadow_st = b.struct_type(p, &[("Inner", inner, true), ("Count", string, false)]);
    b.declare_type(p, "Shadow", shadow_st);

    Embedding {
        program: b.build(),
        outer,
        outer_ptr,
    }
}

#[test]
fn test_promoted_method_through_embedded_pointer() {
    let Embedding { program, .. } = embedding_program();
    let reset = Resolver::new(&program).resolve("p", "Outer", &["Reset"]).unwrap();
    assert_eq!(program.qualified_name(reset), "p.Inner.Reset");
}

#[test]
fn test_promoted_field() {
    let Embedding { program, .. } = embedding_program();
    let count = Resolver::new(&program).resolve("p", "Outer", &["Count"]).unwrap();
    assert_eq!(program.qualified_name(count), "p.Inner.Count");
}

#[test]
fn test_shallower_field_shadows_promoted_one() {
    let Embedding { program, .. } = embedding_program();
    let count = Resolver::new(&program).resolve("p", "Shadow", &["Count"]).unwrap();
    assert_eq!(program.qualified_name(count), "p.Shadow.Count");
}

#[test]
fn test_ambiguous_selector_is_unknown_member() {
    let Embedding { program, .. } = embedding_program();
    let err = Resolver::new(&program).resolve("p", "Both", &["ID"]).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownMember { ref field, .. } if field == "ID"));
}

#[test]
fn test_lookup_strips_one_pointer() {
    let Embedding {
        program,
        outer,
        outer_ptr,
    } = embedding_program();

    let direct = program.lookup_field_or_method(outer, "Name");
    assert!(matches!(direct, LookupResult::Found(_)));
    assert_eq!(program.lookup_field_or_method(outer_ptr, "Name"), direct);
    assert_eq!(
        program.lookup_field_or_method(outer_ptr, "Missing"),
        LookupResult::NotFound
    );
}
