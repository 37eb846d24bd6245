//! End-to-end splice tests against a minimal synthetic descriptor that
//! carries every required section anchor and old-block literal.

use pbxpatch_catalog::{anchors, blocks, ids, widget_extension_ops};
use pbxpatch_edit::apply_ops;
use pbxpatch_types::ops::{SpliceKind, StepId};
use pbxpatch_types::report::StepStatus;
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../tests/fixtures/minimal.pbxproj");

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn every_step_matches_the_fixture() {
    let (_, results) = apply_ops(FIXTURE, &widget_extension_ops());
    for r in &results {
        assert_eq!(r.status, StepStatus::Matched, "step {} missed", r.step);
    }
}

#[test]
fn each_block_lands_exactly_once() {
    let ops = widget_extension_ops();
    let (out, _) = apply_ops(FIXTURE, &ops);

    for op in &ops {
        match &op.kind {
            SpliceKind::InsertBefore { block, .. } => {
                assert_eq!(count(&out, block), 1, "step {}", op.step);
            }
            SpliceKind::ReplaceBlock { old, new } => {
                assert_eq!(count(&out, new), 1, "step {}", op.step);
                // The new block embeds the old lines, so the old text still
                // occurs, but only inside the replacement.
                assert_eq!(count(&out, old), count(new, old), "step {}", op.step);
            }
        }
    }
}

#[test]
fn inserted_blocks_sit_immediately_before_their_anchors() {
    let ops = widget_extension_ops();
    let (out, _) = apply_ops(FIXTURE, &ops);

    for op in &ops {
        let SpliceKind::InsertBefore { anchor, block } = &op.kind else {
            continue;
        };
        // Debug is followed by Release at the shared anchor, not by the
        // anchor itself.
        if op.step == StepId::BuildConfigDebug {
            let run = format!(
                "{}{}{}",
                blocks::build_configuration_debug(),
                blocks::build_configuration_release(),
                anchors::END_BUILD_CONFIGURATION
            );
            assert_eq!(count(&out, &run), 1);
            continue;
        }
        let adjacent = format!("{block}{anchor}");
        assert_eq!(count(&out, &adjacent), 1, "step {}", op.step);
    }
}

#[test]
fn file_grows_by_exactly_the_catalog_delta() {
    let ops = widget_extension_ops();
    let (out, _) = apply_ops(FIXTURE, &ops);

    let delta: i64 = ops.iter().map(|op| op.byte_delta()).sum();
    assert_eq!(out.len() as i64, FIXTURE.len() as i64 + delta);
}

#[test]
fn new_target_is_linked_everywhere_it_must_be() {
    let (out, _) = apply_ops(FIXTURE, &widget_extension_ops());

    // Project targets list.
    assert!(out.contains(&format!("\t\t\t\t{} /* {} */,\n\t\t\t);", ids::TARGET, blocks::TARGET_NAME)));
    // Products group.
    assert!(out.contains(&format!("\t\t\t\t{} /* {} */,", ids::PRODUCT_REF, blocks::PRODUCT_FILE)));
    // Its own configuration list references both configurations.
    assert!(out.contains(&format!("\t\t\t\t{} /* Debug */,", ids::CFG_DEBUG)));
    assert!(out.contains(&format!("\t\t\t\t{} /* Release */,", ids::CFG_RELEASE)));
    // Host app depends on the extension and embeds it.
    assert!(out.contains(&format!("\t\t\t\t{} /* PBXTargetDependency */,", ids::DEPENDENCY)));
    assert!(out.contains(&format!("\t\t\t\t{} /* {} */,", ids::EMBED_PHASE, blocks::EMBED_PHASE_NAME)));
}

#[test]
fn second_run_is_not_idempotent() {
    let ops = widget_extension_ops();
    let (once, _) = apply_ops(FIXTURE, &ops);
    let (twice, results) = apply_ops(&once, &ops);

    // Most whole-block replacements no longer find their old text. The
    // target-attributes old block survives as a prefix of its replacement,
    // so that step re-matches and duplicates instead.
    let missing: Vec<StepId> = results
        .iter()
        .filter(|r| r.status == StepStatus::AnchorMissing)
        .map(|r| r.step)
        .collect();
    assert_eq!(
        missing,
        vec![
            StepId::ProductsGroupChild,
            StepId::MainGroupChild,
            StepId::ProjectTargetList,
            StepId::AppTargetEmbed,
        ]
    );

    // Anchor-relative inserts happily duplicate their entries.
    assert_eq!(count(&twice, &blocks::build_file_entry()), 2);
    assert_eq!(count(&twice, &blocks::native_target()), 2);
    let new_target_attr = format!("\t\t\t\t\t{} = {{", ids::TARGET);
    assert_eq!(count(&twice, &new_target_attr), 2);
    assert_ne!(twice, once);
}
