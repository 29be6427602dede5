use tracing::debug;

use crate::dataset::Dataset;
use crate::record::Record;
use crate::text::{normalise_words, split_command};

/// 1 when the query is exactly the record's shortcut, byte for byte.
pub fn shortcut_score(query: &str, record: &Record) -> u32 {
    u32::from(record.shortcut == query)
}

pub fn shortcut_matcher(query: &str, dataset: &Dataset) -> Vec<u32> {
    dataset
        .records
        .iter()
        .map(|r| shortcut_score(query, r))
        .collect()
}

/// Count every (query word, command word) pair where the command word
/// contains the query word.
///
/// When the first query word names a program in the dataset, only that
/// program's records are scored.
pub fn word_matcher(query: &str, dataset: &Dataset) -> Vec<u32> {
    let mut scores = vec![0; dataset.len()];
    let query_words = normalise_words(query, &dataset.stop_words);
    let Some(first) = query_words.first() else {
        return scores;
    };

    let program_filter = dataset
        .program_names()
        .contains(first)
        .then_some(first.as_str());
    if let Some(program) = program_filter {
        debug!(program, "word matcher restricted to program");
    }

    for (score, record) in scores.iter_mut().zip(&dataset.records) {
        if let Some(program) = program_filter {
            if !record.program.eq_ignore_ascii_case(program) {
                continue;
            }
        }
        let command_words = normalise_words(&record.command, &dataset.stop_words);
        *score = query_words
            .iter()
            .map(|qw| {
                command_words
                    .iter()
                    .filter(|cw| cw.contains(qw.as_str()))
                    .count() as u32
            })
            .sum();
    }
    scores
}

/// Acronym match: the first query byte must equal the first byte of the
/// program name, then each following character scores when it equals the
/// first byte of the command word at the same offset.
///
/// Offsets and the word-count guard are in bytes, so a multi-byte query
/// needs more command words than it has characters.
pub fn initial_score(query: &str, record: &Record) -> u32 {
    let (Some(q0), Some(p0)) = (query.as_bytes().first(), record.program.as_bytes().first())
    else {
        return 0;
    };
    if q0 != p0 {
        return 0;
    }

    let words = split_command(&record.command);
    if words.len() < query.len() - 1 {
        return 0;
    }

    query
        .char_indices()
        .skip_while(|&(i, _)| i == 0)
        .filter(|&(i, ch)| {
            words
                .get(i - 1)
                .and_then(|w| w.as_bytes().first())
                .is_some_and(|&b| u32::from(b) == u32::from(ch))
        })
        .count() as u32
}

pub fn initial_matcher(query: &str, dataset: &Dataset) -> Vec<u32> {
    dataset
        .records
        .iter()
        .map(|r| initial_score(query, r))
        .collect()
}

/// A record that scored above zero, with its position in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub index: usize,
    pub score: u32,
    pub record: &'a Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Ranked best first. Never empty.
    Found(Vec<Hit<'a>>),
    NoResults,
}

impl<'a> SearchOutcome<'a> {
    pub fn hits(&self) -> &[Hit<'a>] {
        match self {
            SearchOutcome::Found(hits) => hits,
            SearchOutcome::NoResults => &[],
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.hits().iter().map(|h| h.record)
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchOutcome::NoResults)
    }
}

/// Run the three matchers, sum their scores and rank the records.
pub fn rank<'a>(query: &str, dataset: &'a Dataset) -> SearchOutcome<'a> {
    debug!(query, records = dataset.len(), "ranking");

    let mut scores = initial_matcher(query, dataset);
    debug!("completed initial matcher");
    for (total, s) in scores.iter_mut().zip(word_matcher(query, dataset)) {
        *total += s;
    }
    debug!("completed word matcher");
    for (total, s) in scores.iter_mut().zip(shortcut_matcher(query, dataset)) {
        *total += s;
    }
    debug!("completed shortcut matcher");

    let mut hits: Vec<Hit<'a>> = scores
        .into_iter()
        .zip(&dataset.records)
        .enumerate()
        .filter(|(_, (score, _))| *score > 0)
        .map(|(index, (score, record))| Hit {
            index,
            score,
            record,
        })
        .collect();

    // `sort_by` is stable: equal scores keep dataset order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(hits = hits.len(), "sorted results");

    if hits.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Found(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_word() -> Dataset {
        Dataset::from_records(vec![Record::new("vim", "delete word", "dw")])
    }

    fn mixed() -> Dataset {
        Dataset::from_records(vec![
            Record::new("vim", "delete word", "dw"),
            Record::new("tmux", "kill window", "ctrl-b x"),
            Record::new("vim", "change word", "cw"),
            Record::new("tmux", "select window", "ctrl-b w"),
            Record::new("vim", "focus window left", "ctrl-w h"),
        ])
    }

    #[test]
    fn shortcut_is_exact_and_case_sensitive() {
        let r = Record::new("vim", "previous tab", "gT");
        assert_eq!(shortcut_score("gT", &r), 1);
        assert_eq!(shortcut_score("gt", &r), 0);
        assert_eq!(shortcut_score("gT ", &r), 0);

        let r = Record::new("vim", "replace in file", ":%s/<find>/replace/g");
        assert_eq!(shortcut_score(":%s/<find>/replace/g", &r), 1);
    }

    #[test]
    fn empty_query_has_no_word_or_initial_score() {
        let dataset = mixed();
        assert!(word_matcher("", &dataset).iter().all(|&s| s == 0));
        assert!(initial_matcher("", &dataset).iter().all(|&s| s == 0));
    }

    #[test]
    fn blank_and_stop_word_queries_score_zero() {
        let dataset = mixed();
        assert!(word_matcher("   ", &dataset).iter().all(|&s| s == 0));
        assert!(word_matcher("the of", &dataset).iter().all(|&s| s == 0));
    }

    #[test]
    fn word_match_is_substring_containment() {
        let dataset = delete_word();
        assert_eq!(word_matcher("wor", &dataset), vec![1]);
        assert_eq!(word_matcher("DELETE", &dataset), vec![1]);
        assert_eq!(word_matcher("words", &dataset), vec![0]);
    }

    #[test]
    fn one_query_word_can_match_several_command_words() {
        let dataset =
            Dataset::from_records(vec![Record::new("vim", "copy lines / yank lines", "y")]);
        assert_eq!(word_matcher("lines", &dataset), vec![2]);
    }

    #[test]
    fn command_stop_words_are_not_matched() {
        let dataset = Dataset::from_records(vec![Record::new(
            "vim",
            "advance to end of current/next word",
            "e",
        )]);
        // "of" is dropped from both sides; "o" still matches "to" and "word".
        assert_eq!(word_matcher("of", &dataset), vec![0]);
        assert_eq!(word_matcher("o", &dataset), vec![2]);
    }

    #[test]
    fn leading_program_name_filters_word_matches() {
        let dataset = mixed();
        let scores = word_matcher("vim window", &dataset);
        for (score, record) in scores.iter().zip(&dataset.records) {
            if record.program != "vim" {
                assert_eq!(*score, 0, "{record}");
            }
        }
        assert_eq!(scores, vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn program_filter_is_case_insensitive() {
        let dataset = mixed();
        assert_eq!(word_matcher("TMUX window", &dataset), vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn unknown_first_word_does_not_filter() {
        let dataset = mixed();
        assert_eq!(word_matcher("window", &dataset), vec![0, 1, 0, 1, 1]);
    }

    #[test]
    fn initial_matches_program_then_command_initials() {
        let r = Record::new("vim", "delete word", "dw");
        assert_eq!(initial_score("vd", &r), 1);
        assert_eq!(initial_score("vdw", &r), 2);
        assert_eq!(initial_score("vxw", &r), 1);
        assert_eq!(initial_score("v", &r), 0);
    }

    #[test]
    fn initial_program_byte_is_case_sensitive() {
        let r = Record::new("vim", "delete word", "dw");
        assert_eq!(initial_score("Vd", &r), 0);
        assert_eq!(initial_score("td", &r), 0);
    }

    #[test]
    fn initial_needs_enough_command_words() {
        let r = Record::new("vim", "delete word", "dw");
        assert_eq!(initial_score("vdwx", &r), 0);
    }

    #[test]
    fn initial_command_letters_are_case_sensitive() {
        let r = Record::new("vim", "Go back", "Ctrl-O");
        assert_eq!(initial_score("vG", &r), 1);
        assert_eq!(initial_score("vg", &r), 0);
    }

    #[test]
    fn initial_multibyte_query_uses_byte_offsets() {
        let r = Record::new("vim", "delete word", "dw");
        // "vée" is four bytes, so it needs three command words.
        assert_eq!(initial_score("vée", &r), 0);
        assert_eq!(initial_score("vé", &r), 0);

        // 'n' sits at byte 3, so it is compared with the third word.
        let r = Record::new("vim", "delete word now", "x");
        assert_eq!(initial_score("vén", &r), 1);
        assert_eq!(initial_score("vdn", &r), 1);
    }

    #[test]
    fn initial_tolerates_degenerate_records() {
        assert_eq!(initial_score("vd", &Record::new("", "delete word", "dw")), 0);
        assert_eq!(initial_score("vxd", &Record::new("vim", "delete  word", "dw")), 0);
        assert_eq!(initial_score("é", &Record::new("émacs", "save", "C-x C-s")), 0);
    }

    #[test]
    fn initial_score_is_bounded_by_query_length() {
        let dataset = Dataset::builtin().unwrap();
        for query in ["v", "vd", "vdw", "tnw", "vmld", "vé", "ñx", ""] {
            let bound = query.len().saturating_sub(1) as u32;
            for score in initial_matcher(query, &dataset) {
                assert!(score <= bound, "{query}: {score} > {bound}");
            }
        }
    }

    #[test]
    fn shortcut_query_returns_the_record() {
        let dataset = delete_word();
        let outcome = rank("dw", &dataset);
        assert_eq!(outcome.hits().len(), 1);
        assert_eq!(outcome.hits()[0].score, 1);
    }

    #[test]
    fn program_and_command_word_query_returns_the_record() {
        let dataset = delete_word();
        assert_eq!(word_matcher("vim delete", &dataset), vec![1]);
        let outcome = rank("vim delete", &dataset);
        assert_eq!(outcome.records().collect::<Vec<_>>(), vec![&dataset.records[0]]);
    }

    #[test]
    fn acronym_query_returns_the_record() {
        let dataset = delete_word();
        let outcome = rank("vd", &dataset);
        assert_eq!(outcome.hits()[0].score, 1);
        assert_eq!(outcome.hits()[0].index, 0);
    }

    #[test]
    fn unmatched_query_is_no_results() {
        let dataset = delete_word();
        let outcome = rank("xyz", &dataset);
        assert!(outcome.is_no_results());
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(rank("", &dataset).is_no_results());
    }

    #[test]
    fn empty_dataset_is_no_results() {
        assert!(rank("vim", &Dataset::from_records(Vec::new())).is_no_results());
    }

    #[test]
    fn ranks_by_descending_score() {
        let dataset = mixed();
        let outcome = rank("window left", &dataset);
        let indexes: Vec<usize> = outcome.hits().iter().map(|h| h.index).collect();
        assert_eq!(indexes, vec![4, 1, 3]);
        assert_eq!(outcome.hits()[0].score, 2);
    }

    #[test]
    fn equal_scores_keep_dataset_order() {
        let dataset = Dataset::from_records(vec![
            Record::new("tmux", "next window", "ctrl-b n"),
            Record::new("vim", "paste", "p"),
            Record::new("tmux", "kill window", "ctrl-b x"),
            Record::new("tmux", "new window", "ctrl-b c"),
        ]);
        let outcome = rank("window", &dataset);
        let indexes: Vec<usize> = outcome.hits().iter().map(|h| h.index).collect();
        assert_eq!(indexes, vec![0, 2, 3]);
        assert!(outcome.hits().iter().all(|h| h.score == 1));
    }

    #[test]
    fn total_is_the_sum_of_all_matchers() {
        let dataset = Dataset::builtin().unwrap();
        for query in ["dw", "vim delete", "vdw", "tnw", "window", "ctrl-b c", "gt"] {
            let initial = initial_matcher(query, &dataset);
            let word = word_matcher(query, &dataset);
            let shortcut = shortcut_matcher(query, &dataset);
            let outcome = rank(query, &dataset);
            for hit in outcome.hits() {
                let i = hit.index;
                assert_eq!(hit.score, shortcut[i] + word[i] + initial[i]);
                assert_eq!(hit.score, initial[i] + shortcut[i] + word[i]);
            }
            let expected = (0..dataset.len())
                .filter(|&i| initial[i] + word[i] + shortcut[i] > 0)
                .count();
            assert_eq!(outcome.hits().len(), expected, "{query}");
        }
    }

    #[test]
    fn builtin_shortcut_and_acronym_lookups() {
        let dataset = Dataset::builtin().unwrap();

        let outcome = rank("gt", &dataset);
        assert_eq!(outcome.hits()[0].record.command, "next tab");

        // t + n(ew) w(indow) on tmux.
        let outcome = rank("tnw", &dataset);
        let top = outcome.hits()[0];
        assert_eq!(top.record.program, "tmux");
        assert_eq!(top.record.command, "new window");
        assert_eq!(top.score, 2);
    }

    #[test]
    fn builtin_program_filter_excludes_other_programs() {
        let dataset = Dataset::builtin().unwrap();
        let outcome = rank("tmux paste", &dataset);
        assert!(outcome.records().all(|r| r.program == "tmux"));
        assert_eq!(outcome.hits()[0].record.command, "paste");
    }
}
