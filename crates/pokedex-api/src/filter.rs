//! Case-insensitive name filtering over an in-memory catalog

use crate::model::Record;

/// Records whose name contains `query`, ignoring case, in input order.
/// An empty query keeps everything.
pub fn filter<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| name_matches(&r.name, &needle))
        .collect()
}

/// Positions of matching records, for callers that keep the result across frames
pub fn matching_indices(records: &[Record], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| name_matches(&r.name, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

fn name_matches(name: &str, lowered_query: &str) -> bool {
    lowered_query.is_empty() || name.to_lowercase().contains(lowered_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sprites;

    fn record(id: u32, name: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            height: 1,
            weight: 1,
            sprites: Sprites::default(),
            types: vec!["normal".to_string()],
            abilities: vec![],
        }
    }

    fn catalog() -> Vec<Record> {
        vec![
            record(1, "bulbasaur"),
            record(4, "charmander"),
            record(5, "charmeleon"),
            record(6, "Charizard"),
            record(25, "pikachu"),
            record(26, "raichu"),
        ]
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let c = catalog();
        let out = filter(&c, "");
        assert_eq!(out.len(), c.len());
        assert!(out.iter().zip(c.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let c = catalog();
        assert_eq!(
            names(&filter(&c, "CHAR")),
            vec!["charmander", "charmeleon", "Charizard"]
        );
        assert_eq!(names(&filter(&c, "chu")), vec!["pikachu", "raichu"]);
        assert!(filter(&c, "mew").is_empty());
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let c = catalog();
        for q in ["a", "ar", "u", "zz", "Chu"] {
            let out = filter(&c, q);
            let positions: Vec<usize> = out
                .iter()
                .map(|r| c.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {q}");
            assert!(out
                .iter()
                .all(|r| r.name.to_lowercase().contains(&q.to_lowercase())));
        }
    }

    #[test]
    fn test_idempotent() {
        let c = catalog();
        for q in ["", "char", "A", "xyz"] {
            let once = filter(&c, q);
            let twice = filter(once.iter().copied(), q);
            assert_eq!(once, twice, "query {q}");
        }
    }

    #[test]
    fn test_matching_indices_agree_with_filter() {
        let c = catalog();
        let idx = matching_indices(&c, "char");
        assert_eq!(idx, vec![1, 2, 3]);
        let by_idx: Vec<&Record> = idx.iter().map(|&i| &c[i]).collect();
        assert_eq!(by_idx, filter(&c, "char"));
        assert_eq!(matching_indices(&c, "").len(), c.len());
    }
}
