//! End-to-end builder scenarios
//!
//! Drives the full chain (registry -> session -> validation -> parameter
//! builder -> identity -> applied filter set) the way the rendering layer
//! does, and pins the exact API-facing parameter shapes.

use beacon_query_builder::{
    build, rehydrate_params, AppliedFilterSet, BuilderSession, Conflict, ExclusiveGroup, Field,
    FieldSet, GenomicFilter, QueryShape, QueryTypeRegistry, SubmitOutcome,
};
use serde_json::json;
use std::time::Instant;

fn fields(pairs: &[(Field, &str)]) -> FieldSet {
    let mut set = FieldSet::new();
    for (field, value) in pairs {
        set.set(*field, *value);
    }
    set
}

// =============================================================================
// Parameter contract scenarios
// =============================================================================

#[test]
fn range_query_params_match_contract() {
    let set = fields(&[
        (Field::AssemblyId, "GRCh38"),
        (Field::Chromosome, "chr1"),
        (Field::Start, "1000"),
        (Field::End, "2000"),
    ]);
    let params = build(QueryShape::RangeQuery, &set, ExclusiveGroup::VariationType).unwrap();
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({
            "assemblyId": "GRCh38",
            "referenceName": "CHR1",
            "start": [1000],
            "end": [2000]
        })
    );
}

#[test]
fn bracket_query_params_match_contract() {
    let set = fields(&[
        (Field::AssemblyId, "GRCh38"),
        (Field::Chromosome, "2"),
        (Field::StartMin, "100"),
        (Field::StartMax, "200"),
        (Field::EndMin, "300"),
        (Field::EndMax, "400"),
    ]);
    let params = build(QueryShape::BracketQuery, &set, ExclusiveGroup::VariationType).unwrap();
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value["start"], json!([100, 200]));
    assert_eq!(value["end"], json!([300, 400]));
}

#[test]
fn hgvs_short_form_passes_verbatim() {
    let set = fields(&[(Field::HgvsShortForm, "NC_000001.11:g.1234A>T")]);
    let params = build(QueryShape::HgvsQuery, &set, ExclusiveGroup::VariationType).unwrap();
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({ "genomicAlleleShortForm": "NC_000001.11:g.1234A>T" })
    );
}

#[test]
fn sequence_query_params_match_contract() {
    let set = fields(&[
        (Field::AssemblyId, "GRCh38"),
        (Field::Chromosome, "1"),
        (Field::Start, "12344"),
        (Field::RefBases, "A"),
        (Field::AlternateBases, "G"),
    ]);
    let params = build(QueryShape::SequenceQuery, &set, ExclusiveGroup::VariationType).unwrap();
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({
            "assemblyId": "GRCh38",
            "referenceName": "1",
            "start": [12344],
            "referenceBases": "A",
            "alternateBases": "G"
        })
    );
}

#[test]
fn gene_id_group_params_match_contract() {
    let set = fields(&[
        (Field::GeneId, "BRCA2"),
        (Field::AlternateBases, "ACGT"),
        (Field::AltBases, "TTTT"),
        (Field::MinVariantLength, "5"),
        (Field::MaxVariantLength, "10"),
    ]);
    let params = build(QueryShape::GeneId, &set, ExclusiveGroup::AlternateBases).unwrap();
    // Variant lengths are scalar numbers; the two bases fields share one API
    // key and only the first-mapped value is kept.
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({
            "geneId": "BRCA2",
            "alternateBases": "ACGT",
            "variantMinLength": 5,
            "variantMaxLength": 10
        })
    );
}

// =============================================================================
// Identity properties
// =============================================================================

#[test]
fn identity_is_idempotent_over_entry_order_and_whitespace() {
    let first = fields(&[
        (Field::AssemblyId, "GRCh38"),
        (Field::Chromosome, "chr1"),
        (Field::Start, "1000"),
        (Field::End, "2000"),
    ]);
    let second = fields(&[
        (Field::End, " 2000"),
        (Field::Start, "1000 "),
        (Field::Chromosome, " CHR1 "),
        (Field::AssemblyId, "GRCh38"),
    ]);

    let a = GenomicFilter::from_params(
        build(QueryShape::RangeQuery, &first, ExclusiveGroup::VariationType).unwrap(),
    );
    let b = GenomicFilter::from_params(
        build(QueryShape::RangeQuery, &second, ExclusiveGroup::VariationType).unwrap(),
    );
    assert_eq!(a.identity(), b.identity());
    assert_eq!(a.label(), b.label());
}

#[test]
fn built_params_never_mix_exclusive_groups() {
    let set = fields(&[
        (Field::GeneId, "BRCA2"),
        (Field::VariationType, "DEL"),
        (Field::AlternateBases, "ACGT"),
        (Field::RefAa, "V"),
        (Field::AaPosition, "600"),
        (Field::AltAa, "E"),
    ]);

    for group in ExclusiveGroup::ALL {
        let params = build(QueryShape::GeneId, &set, group).unwrap();
        let mut groups_present = 0;
        if params.get("variantType").is_some() {
            groups_present += 1;
        }
        if params.get("alternateBases").is_some() || params.get("referenceBases").is_some() {
            groups_present += 1;
        }
        if params.get("refAa").is_some() {
            groups_present += 1;
        }
        assert!(groups_present <= 1, "group {group:?} leaked fields");
    }
}

#[test]
fn rehydration_is_shape_isolated() {
    let range = build(
        QueryShape::RangeQuery,
        &fields(&[
            (Field::AssemblyId, "GRCh38"),
            (Field::Chromosome, "1"),
            (Field::Start, "1000"),
        ]),
        ExclusiveGroup::VariationType,
    )
    .unwrap();

    for shape in QueryShape::ALL {
        let back = rehydrate_params(shape, &range);
        if shape == QueryShape::RangeQuery {
            assert!(!back.is_empty());
        } else {
            assert!(back.is_empty(), "{shape} leaked prefill fields");
        }
    }
}

// =============================================================================
// Applied filter set scenarios
// =============================================================================

fn submit_range(filters: &mut AppliedFilterSet) -> SubmitOutcome {
    let registry = QueryTypeRegistry::all_enabled();
    let mut session = BuilderSession::new(&registry);
    session.select_shape(QueryShape::RangeQuery);
    session.set_field(Field::AssemblyId, "GRCh38");
    session.set_field(Field::Chromosome, "chr1");
    session.set_field(Field::Start, "1000");
    session.set_field(Field::End, "2000");
    session.submit(filters, Instant::now()).unwrap()
}

#[test]
fn second_genomic_filter_is_blocked_regardless_of_identity() {
    let mut filters = AppliedFilterSet::new();
    assert!(matches!(
        submit_range(&mut filters),
        SubmitOutcome::Accepted { .. }
    ));

    // A GeneId filter with a completely different identity still conflicts.
    let registry = QueryTypeRegistry::all_enabled();
    let mut session = BuilderSession::new(&registry);
    session.select_shape(QueryShape::GeneId);
    session.set_field(Field::GeneId, "BRCA2");
    let outcome = session.submit(&mut filters, Instant::now()).unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(Conflict::GenomicSlotOccupied { .. })
    ));
    assert_eq!(filters.len(), 1);
}

#[test]
fn resubmitting_identical_fields_reports_duplicate() {
    let mut filters = AppliedFilterSet::new();
    let first = submit_range(&mut filters);
    let identity = match first {
        SubmitOutcome::Accepted { identity } => identity,
        other => panic!("expected Accepted, got {other:?}"),
    };

    let second = submit_range(&mut filters);
    match second {
        SubmitOutcome::Rejected(Conflict::Duplicate { identity: dup }) => {
            assert_eq!(dup, identity);
        }
        other => panic!("expected Duplicate, got {other:?}"),
    }
    assert_eq!(filters.len(), 1);
    assert!(filters.contains(&identity));
}

#[test]
fn removing_the_genomic_filter_frees_the_slot() {
    let mut filters = AppliedFilterSet::new();
    let identity = match submit_range(&mut filters) {
        SubmitOutcome::Accepted { identity } => identity,
        other => panic!("expected Accepted, got {other:?}"),
    };

    assert!(filters.remove(&identity));
    assert!(filters.genomic().is_none());
    assert!(matches!(
        submit_range(&mut filters),
        SubmitOutcome::Accepted { .. }
    ));
}

// =============================================================================
// Edit round trip
// =============================================================================

#[test]
fn edit_prefill_round_trips_through_the_set() {
    let mut filters = AppliedFilterSet::new();
    submit_range(&mut filters);
    let existing = filters.genomic().unwrap().clone();

    let registry = QueryTypeRegistry::all_enabled();
    let mut session = BuilderSession::with_prefill(&registry, &existing);
    assert_eq!(session.shape(), QueryShape::RangeQuery);
    assert_eq!(session.fields().get(Field::End), "2000");

    // Edit the end coordinate, remove the old filter, resubmit.
    session.set_field(Field::End, "3000");
    filters.remove(existing.identity());
    let outcome = session.submit(&mut filters, Instant::now()).unwrap();
    let identity = match outcome {
        SubmitOutcome::Accepted { identity } => identity,
        other => panic!("expected Accepted, got {other:?}"),
    };
    assert_ne!(identity, existing.identity());
    assert_eq!(
        serde_json::to_value(filters.genomic().unwrap().params()).unwrap()["end"],
        json!([3000])
    );
}
