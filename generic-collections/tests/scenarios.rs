use generic_collections::config::{ChunkPolicy, InsertPolicy, ListOptions};
use generic_collections::error::ListError;
use generic_collections::generic::list::{reduce, List};
use generic_collections::generic::map::Map;
use generic_collections::list;

// -----------------------------------------------------------------------------
// List scenarios
// -----------------------------------------------------------------------------

#[test]
fn chunk_by_two_splits_evenly() {
    let list = list![2, 4, 6, 8];
    assert_eq!(list.chunk(2).unwrap(), vec![list![2, 4], list![6, 8]]);
}

#[test]
fn chunk_by_three_keeps_remainder() {
    let list = list![2, 4, 6, 8];
    assert_eq!(list.chunk(3).unwrap(), vec![list![2, 4, 6], list![8]]);
}

#[test]
fn insert_before_existing_index() {
    let mut list = list![2, 4, 6];
    list.insert(2, 5).unwrap();
    assert_eq!(list, [2, 4, 5, 6]);
}

#[test]
fn replace_first_match_or_not_found() {
    let mut list = list![2, 4, 6];
    list.replace(&6, 8).unwrap();
    assert_eq!(list, [2, 4, 8]);

    let mut list = list![2, 4, 6];
    assert_eq!(list.replace(&1, 8), Err(ListError::NotFound));
    assert_eq!(list, [2, 4, 6]);
}

#[test]
fn reduce_sums_elements() {
    assert_eq!(reduce(&list![1, 2, 3], 0, |acc, n| acc + n), 6);
}

#[test]
fn empty_list_reports_empty() {
    let mut list: List<i32> = List::new();
    assert_eq!(list.first(), Err(ListError::Empty));
    assert_eq!(list.last(), Err(ListError::Empty));
    assert_eq!(list.pop_first(), Err(ListError::Empty));
    assert_eq!(list.pop_last(), Err(ListError::Empty));
    for index in [0, 1, usize::MAX] {
        assert_eq!(list.get(index), Err(ListError::Empty));
    }
}

#[test]
fn errors_bubble_through_question_mark() {
    fn second_plus_last(list: &List<i32>) -> Result<i32, ListError> {
        Ok(list.get(1)? + list.last()?)
    }

    assert_eq!(second_plus_last(&list![1, 2, 3]), Ok(5));
    assert_eq!(
        second_plus_last(&list![1]),
        Err(ListError::Index { index: 1, len: 1 })
    );
    assert_eq!(second_plus_last(&list![]), Err(ListError::Empty));
}

#[test]
fn options_loaded_from_config() {
    let options: ListOptions =
        serde_json::from_str(r#"{ "chunk": "strict", "insert": "allow_append" }"#).unwrap();
    assert_eq!(options.chunk, ChunkPolicy::Strict);
    assert_eq!(options.insert, InsertPolicy::AllowAppend);

    let mut list = List::with_options(options);
    list.insert(0, 1).unwrap();
    list.insert(1, 2).unwrap();
    assert_eq!(list, [1, 2]);
    assert_eq!(list.chunk(0), Err(ListError::InvalidChunkSize));
}

#[test]
fn unknown_policy_is_rejected() {
    let parsed = serde_json::from_str::<ListOptions>(r#"{ "chunk": "sometimes" }"#);
    assert!(parsed.is_err());
}

// -----------------------------------------------------------------------------
// Map scenarios
// -----------------------------------------------------------------------------

#[test]
fn map_projections_cover_all_entries() {
    let mut map = Map::new();
    map.insert("alpha", 1);
    map.insert("beta", 2);
    map.insert("gamma", 3);

    let mut keys = map.keys();
    keys.sort_unstable();
    assert_eq!(keys, vec!["alpha", "beta", "gamma"]);

    let total: i32 = map.vals().iter().sum();
    assert_eq!(total, 6);
}

#[test]
fn map_keys_feed_a_list() {
    let map: Map<u8, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let keys: List<u8> = map.keys().into_iter().collect();

    assert_eq!(keys.len(), 2);
    assert!(keys.contains_all(&[1, 2]));
}
