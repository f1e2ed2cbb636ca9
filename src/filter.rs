use crate::models::{PromiseRecord, ViewState};

/// Records visible for `view`, in their original order.
pub fn filter_promises<'a>(records: &'a [PromiseRecord], view: &ViewState) -> Vec<&'a PromiseRecord> {
    let query = view.search_query.to_lowercase();
    records
        .iter()
        .filter(|record| view.active_tab.admits(&record.status) && matches_query(record, &query))
        .collect()
}

/// `query` must already be lowercased.
fn matches_query(record: &PromiseRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [&record.promise, &record.politician, &record.region]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::models::{Status, Tab, TABS};

    fn ids(records: &[&PromiseRecord]) -> Vec<u32> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn default_view_returns_everything_in_order() {
        let data = Dataset::builtin();
        let result = filter_promises(&data.promises, &ViewState::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn fulfilled_tab_keeps_only_fulfilled_records() {
        let data = Dataset::builtin();
        let result = filter_promises(&data.promises, &ViewState::new(Tab::Fulfilled, ""));
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn search_matches_region_case_insensitively() {
        let data = Dataset::builtin();
        let result = filter_promises(&data.promises, &ViewState::new(Tab::All, "karnataka"));
        assert_eq!(ids(&result), vec![3]);
        let result = filter_promises(&data.promises, &ViewState::new(Tab::All, "KARNATAKA"));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn tab_and_search_must_both_match() {
        let data = Dataset::builtin();
        let result = filter_promises(&data.promises, &ViewState::new(Tab::Delayed, "bus"));
        assert!(result.is_empty());
    }

    #[test]
    fn search_covers_politician_and_promise_text() {
        let data = Dataset::builtin();
        let result = filter_promises(&data.promises, &ViewState::new(Tab::All, "up gov"));
        assert_eq!(ids(&result), vec![2]);
        let result = filter_promises(&data.promises, &ViewState::new(Tab::All, "Tablets"));
        assert_eq!(ids(&result), vec![2]);
        // Evidence and category are not searched.
        let result = filter_promises(&data.promises, &ViewState::new(Tab::All, "maitri"));
        assert!(result.is_empty());
    }

    #[test]
    fn every_result_satisfies_both_predicates() {
        let data = Dataset::builtin();
        let queries = ["", "a", "in", "government", "CM", "zzz", "Nadu", " "];
        for tab in TABS {
            for query in queries {
                let view = ViewState::new(tab, query);
                let result = filter_promises(&data.promises, &view);
                let needle = query.to_lowercase();
                for record in &result {
                    assert!(tab.admits(&record.status));
                    assert!(
                        record.promise.to_lowercase().contains(&needle)
                            || record.politician.to_lowercase().contains(&needle)
                            || record.region.to_lowercase().contains(&needle)
                    );
                }
                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| data.promises.iter().position(|p| p.id == r.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn unrecognized_status_is_listed_only_under_all() {
        let mut data = Dataset::builtin();
        data.promises[0].status = Status::Unrecognized("paused".into());
        let all = filter_promises(&data.promises, &ViewState::default());
        assert_eq!(all.len(), 4);
        let in_progress = filter_promises(&data.promises, &ViewState::new(Tab::InProgress, ""));
        assert!(in_progress.is_empty());
    }

    #[test]
    fn filtering_does_not_touch_records() {
        let data = Dataset::builtin();
        let before = data.clone();
        let _ = filter_promises(&data.promises, &ViewState::new(Tab::Delayed, "x"));
        assert_eq!(data, before);
    }
}
