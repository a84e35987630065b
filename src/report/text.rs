//! Console and JSON renderings of a [`Summary`].

use crate::config::ReportConfig;
use crate::error::Result;
use crate::stats::Summary;

/// Printed instead of any statistics when no record survived parsing.
pub const NO_MESSAGES: &str = "No messages found in the chat data.";

/// Formats the console report.
///
/// Sections, in order: senders without the marker, top sender(s),
/// ranked sender list, most common words.
pub fn to_text(summary: &Summary, config: &ReportConfig) -> String {
    if summary.is_empty() {
        return format!("{NO_MESSAGES}\n");
    }

    let mut out = String::new();

    out.push_str(&format!(
        "Names that don't have {} in their sent message:\n",
        config.sender_marker
    ));
    for sender in &summary.senders_without_marker {
        out.push_str(sender);
        out.push('\n');
    }

    let leaders: Vec<&str> = summary
        .senders
        .leaders()
        .into_iter()
        .map(String::as_str)
        .collect();
    if let [only] = leaders.as_slice() {
        out.push_str(&format!(
            "The sender with the highest number of messages is: {only}\n"
        ));
    } else {
        out.push_str(&format!(
            "The senders with the highest number of messages are: {}\n",
            leaders.join(", ")
        ));
    }

    out.push_str(&format!("Top {} Message Senders:\n", config.top_senders));
    for (rank, (sender, count)) in summary.senders.top(config.top_senders).iter().enumerate() {
        out.push_str(&format!("{}. {sender}: {count} messages\n", rank + 1));
    }

    out.push_str("Most Common Words:\n");
    for (word, count) in &summary.top_words {
        out.push_str(&format!("{word}: {count}\n"));
    }

    out
}

/// Serializes the summary as pretty-printed JSON.
pub fn to_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use chrono::NaiveDate;

    fn record(sender: &str, message: &str) -> Record {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Record::new(ts, sender, message)
    }

    fn summary(records: &[Record]) -> Summary {
        Summary::from_records(records, &ReportConfig::default())
    }

    #[test]
    fn test_text_empty() {
        let text = to_text(&summary(&[]), &ReportConfig::default());
        assert_eq!(text, "No messages found in the chat data.\n");
    }

    #[test]
    fn test_text_single_leader() {
        let records = vec![
            record("Alice", "hi there"),
            record("Bob", "hey"),
            record("Alice", "hi again"),
        ];
        let text = to_text(&summary(&records), &ReportConfig::default());
        assert!(text.contains("The sender with the highest number of messages is: Alice\n"));
        assert!(text.contains("Top 50 Message Senders:\n1. Alice: 2 messages\n2. Bob: 1 messages\n"));
        assert!(text.contains("Most Common Words:\nhi: 2\n"));
    }

    #[test]
    fn test_text_tied_leaders() {
        let records = vec![record("Alice", "a"), record("Bob", "b")];
        let text = to_text(&summary(&records), &ReportConfig::default());
        assert!(text.contains("The senders with the highest number of messages are: Alice, Bob\n"));
    }

    #[test]
    fn test_text_lists_unmarked_senders() {
        let records = vec![record("Alice", "plain"), record("Bob", "~ tilde")];
        let text = to_text(&summary(&records), &ReportConfig::default());
        assert!(text.starts_with("Names that don't have ~ in their sent message:\nAlice\nThe sender"));
    }

    #[test]
    fn test_text_respects_top_senders_limit() {
        let records = vec![record("A", "x"), record("B", "x"), record("C", "x")];
        let config = ReportConfig::default().with_top_senders(2);
        let text = to_text(&summary(&records), &config);
        assert!(text.contains("Top 2 Message Senders:"));
        assert!(text.contains("2. B: 1 messages"));
        assert!(!text.contains("3. C"));
    }

    #[test]
    fn test_text_full_layout() {
        let records = vec![record("Alice", "hi there"), record("Bob", "~ hey")];
        let text = to_text(&summary(&records), &ReportConfig::default());
        assert_eq!(
            text,
            "Names that don't have ~ in their sent message:\n\
             Alice\n\
             The senders with the highest number of messages are: Alice, Bob\n\
             Top 50 Message Senders:\n\
             1. Alice: 1 messages\n\
             2. Bob: 1 messages\n\
             Most Common Words:\n\
             hi: 1\n\
             there: 1\n\
             ~: 1\n\
             hey: 1\n"
        );
    }

    #[test]
    fn test_json_summary() {
        let records = vec![record("Alice", "hello")];
        let json = to_json(&summary(&records)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_messages"], 1);
        assert_eq!(value["senders"][0][0], "Alice");
        assert_eq!(value["days"]["2023-01-01"], 1);
        assert_eq!(value["top_words"][0][0], "hello");
    }
}
