//! Recommendation algorithm
//!
//! Pure function of (catalog, current path). Recomputed on every
//! navigation change; no caching, no I/O.

use shared_types::Tool;

/// Maximum number of suggestions shown under a tool page
pub const MAX_RELATED: usize = 6;

/// Select up to [`MAX_RELATED`] tools related to the one at `current_path`.
///
/// Selection order:
/// 1. Tools in the same category as the current tool, in catalog order.
/// 2. Tools from other categories, by descending popularity (missing
///    popularity counts as 0; ties keep catalog order).
///
/// The current tool is never included. If `current_path` matches nothing
/// in the catalog, the first six catalog entries are returned as-is. An
/// empty result means the caller should render no related section at all.
pub fn related_tools<'a>(catalog: &'a [Tool], current_path: &str) -> Vec<&'a Tool> {
    let current = match catalog.iter().find(|t| t.path == current_path) {
        Some(tool) => tool,
        // Unknown page: no category to anchor on, show the catalog head
        None => return catalog.iter().take(MAX_RELATED).collect(),
    };

    let mut picks: Vec<&Tool> = catalog
        .iter()
        .filter(|t| t.category == current.category && t.path != current.path)
        .collect();

    if picks.len() < MAX_RELATED {
        let mut fallback: Vec<&Tool> = catalog
            .iter()
            .filter(|t| t.category != current.category && t.path != current.path)
            .collect();
        // sort_by is stable, so equal ranks keep their catalog order
        fallback.sort_by(|a, b| b.popularity_rank().cmp(&a.popularity_rank()));
        picks.extend(fallback);
    }

    picks.truncate(MAX_RELATED);
    picks
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::ToolCategory;

    static IDS: &[&str] = &[
        "t00", "t01", "t02", "t03", "t04", "t05", "t06", "t07", "t08", "t09", "t10", "t11",
        "t12", "t13", "t14", "t15",
    ];

    fn arb_category() -> impl Strategy<Value = ToolCategory> {
        prop_oneof![
            Just(ToolCategory::Pdf),
            Just(ToolCategory::Image),
            Just(ToolCategory::Text),
            Just(ToolCategory::Inspect),
        ]
    }

    /// Catalogs with unique paths, drawn from a fixed id pool
    fn arb_catalog() -> impl Strategy<Value = Vec<Tool>> {
        proptest::sample::subsequence(IDS.to_vec(), 0..IDS.len()).prop_flat_map(|ids| {
            let len = ids.len();
            (
                Just(ids),
                proptest::collection::vec(arb_category(), len),
                proptest::collection::vec(proptest::option::of(0u32..100), len),
            )
                .prop_map(|(ids, cats, pops)| {
                    ids.into_iter()
                        .zip(cats)
                        .zip(pops)
                        .map(|((id, category), popularity)| Tool {
                            id,
                            path: id,
                            name: id,
                            description: "",
                            icon: id,
                            category,
                            popularity,
                        })
                        .collect()
                })
        })
    }

    proptest! {
        #[test]
        fn never_more_than_six(catalog in arb_catalog(), pick in 0usize..IDS.len()) {
            let current = IDS[pick];
            prop_assert!(related_tools(&catalog, current).len() <= MAX_RELATED);
        }

        #[test]
        fn current_tool_excluded_when_present(catalog in arb_catalog()) {
            for current in catalog.iter().map(|t| t.path) {
                let result = related_tools(&catalog, current);
                prop_assert!(result.iter().all(|t| t.path != current));
            }
        }

        #[test]
        fn same_category_prefix_in_catalog_order(catalog in arb_catalog()) {
            for current in catalog.iter() {
                let result = related_tools(&catalog, current.path);
                let expected: Vec<&str> = catalog
                    .iter()
                    .filter(|t| t.category == current.category && t.path != current.path)
                    .map(|t| t.path)
                    .take(MAX_RELATED)
                    .collect();
                let got: Vec<&str> = result.iter().take(expected.len()).map(|t| t.path).collect();
                prop_assert_eq!(got, expected);
            }
        }

        #[test]
        fn fallback_is_sorted_by_popularity(catalog in arb_catalog()) {
            for current in catalog.iter() {
                let same_count = catalog
                    .iter()
                    .filter(|t| t.category == current.category && t.path != current.path)
                    .count();
                let result = related_tools(&catalog, current.path);
                let ranks: Vec<u32> = result
                    .iter()
                    .skip(same_count)
                    .map(|t| t.popularity_rank())
                    .collect();
                prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
            }
        }

        #[test]
        fn unknown_path_is_catalog_head(catalog in arb_catalog()) {
            let result = related_tools(&catalog, "/nowhere");
            let expected: Vec<&str> = catalog.iter().map(|t| t.path).take(MAX_RELATED).collect();
            let got: Vec<&str> = result.iter().map(|t| t.path).collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn idempotent(catalog in arb_catalog(), pick in 0usize..IDS.len()) {
            let current = IDS[pick];
            let a: Vec<&str> = related_tools(&catalog, current).iter().map(|t| t.path).collect();
            let b: Vec<&str> = related_tools(&catalog, current).iter().map(|t| t.path).collect();
            prop_assert_eq!(a, b);
        }
    }
}
