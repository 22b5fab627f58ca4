use core::ptr;

use nullsafe::access::{BreakCause, Broken};
use nullsafe::access::{fetch_chain_2, fetch_chain_9, fetch_chain_or_default_2};
use nullsafe::access::{is_chain_present_2, is_chain_present_9};
use nullsafe::prelude::*;

macro_rules! dto {
    ($name:ident -> $field:ident: $child:ident) => {
        #[derive(Debug, Default, PartialEq)]
        struct $name {
            $field: Option<$child>,
        }

        impl $name {
            fn $field(&self) -> Option<&$child> {
                self.$field.as_ref()
            }
        }
    };
}

dto!(DtoA -> b: DtoB);
dto!(DtoB -> c: DtoC);
dto!(DtoC -> d: DtoD);
dto!(DtoD -> e: DtoE);
dto!(DtoE -> f: DtoF);
dto!(DtoF -> g: DtoG);
dto!(DtoG -> h: DtoH);
dto!(DtoH -> i: DtoI);
dto!(DtoI -> j: DtoJ);

#[derive(Debug, Default, PartialEq)]
struct DtoJ {
    id: u32,
}

fn populated() -> DtoA {
    let i = DtoI {
        j: Some(DtoJ { id: 42 }),
    };
    let h = DtoH { i: Some(i) };
    let g = DtoG { h: Some(h) };
    let f = DtoF { g: Some(g) };
    let e = DtoE { f: Some(f) };
    let d = DtoD { e: Some(e) };
    let c = DtoC { d: Some(d) };
    let b = DtoB { c: Some(c) };
    DtoA { b: Some(b) }
}

fn leaf(a: &DtoA) -> &DtoJ {
    let b = a.b.as_ref().unwrap();
    let c = b.c.as_ref().unwrap();
    let d = c.d.as_ref().unwrap();
    let e = d.e.as_ref().unwrap();
    let f = e.f.as_ref().unwrap();
    let g = f.g.as_ref().unwrap();
    let h = g.h.as_ref().unwrap();
    let i = h.i.as_ref().unwrap();
    i.j.as_ref().unwrap()
}

#[test]
fn nine_levels_all_populated() {
    let a = populated();
    let expected = leaf(&a);

    let direct = fetch_safe(|| a.b()?.c()?.d()?.e()?.f()?.g()?.h()?.i()?.j());
    assert!(direct.is_some_and(|j| ptr::eq(j, expected)));
    assert!(is_present(|| a.b()?.c()?.d()?.e()?.f()?.g()?.h()?.i()?.j()));

    let chained = fetch_chain_9(
        Some(&a),
        DtoA::b,
        DtoB::c,
        DtoC::d,
        DtoD::e,
        DtoE::f,
        DtoF::g,
        DtoG::h,
        DtoH::i,
        DtoI::j,
    );
    assert!(chained.is_some_and(|j| ptr::eq(j, expected) && j.id == 42));

    assert!(is_chain_present_9(
        Some(&a),
        DtoA::b,
        DtoB::c,
        DtoC::d,
        DtoD::e,
        DtoE::f,
        DtoF::g,
        DtoG::h,
        DtoH::i,
        DtoI::j,
    ));
}

#[test]
fn beyond_nine_levels() {
    let a = populated();

    let id = fetch_chain!(
        Some(&a),
        DtoA::b,
        DtoB::c,
        DtoC::d,
        DtoD::e,
        DtoE::f,
        DtoF::g,
        DtoG::h,
        DtoH::i,
        DtoI::j,
        required(|j: &DtoJ| j.id),
    );
    assert_eq!(id, Some(42));
}

#[test]
fn missing_second_level_uses_default() {
    let a = DtoA {
        b: Some(DtoB::default()),
    };
    let fallback = DtoC::default();

    assert!(!is_present(|| a.b()?.c()));
    let c = fetch_safe_or_default(|| a.b()?.c(), &fallback);
    assert!(ptr::eq(c, &fallback));

    assert!(!is_chain_present_2(Some(&a), DtoA::b, DtoB::c));
    let c = fetch_chain_or_default_2(Some(&a), &fallback, DtoA::b, DtoB::c);
    assert!(ptr::eq(c, &fallback));

    let c = fetch_chain_or_default!(Some(&a), &fallback, DtoA::b, DtoB::c);
    assert!(ptr::eq(c, &fallback));
}

#[test]
fn missing_first_level_uses_default() {
    let a = DtoA::default();
    let fallback = DtoC::default();

    let c = fetch_chain_or_default_2(Some(&a), &fallback, DtoA::b, DtoB::c);
    assert!(ptr::eq(c, &fallback));
}

#[test]
fn partial_chain_returns_present_prefix() {
    let a = DtoA {
        b: Some(DtoB::default()),
    };

    assert_eq!(fetch_chain_2(Some(&a), DtoA::b, DtoB::c), None);
    assert_eq!(fetch_chain!(Some(&a), DtoA::b), Some(&DtoB::default()));
    assert_eq!(fetch_safe(|| a.b()?.c()), None);
}

#[test]
fn absent_root() {
    assert_eq!(fetch_chain_2(None::<&DtoA>, DtoA::b, DtoB::c), None);
    assert!(!Chain::new(None::<&DtoA>).then(DtoA::b).is_present());
}

#[test]
fn locate_names_missing_link() {
    let mut a = populated();
    let f = a
        .b
        .as_mut()
        .and_then(|b| b.c.as_mut())
        .and_then(|c| c.d.as_mut())
        .and_then(|d| d.e.as_mut())
        .and_then(|e| e.f.as_mut());
    if let Some(f) = f {
        f.g = None;
    }

    let broken = Chain::of(&a)
        .then(DtoA::b)
        .then(DtoB::c)
        .then(DtoC::d)
        .then(DtoD::e)
        .then(DtoE::f)
        .then(DtoF::g)
        .then(DtoG::h)
        .locate();
    assert_eq!(broken.map(|_| ()), Err(Broken { step: 6, cause: BreakCause::AbsentValue }));
}
