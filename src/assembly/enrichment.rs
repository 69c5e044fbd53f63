//! AnalysisEnricher: append analysis entries to an assembled record
//!
//! Enrichment appends; it never replaces. Running it twice with the same
//! input leaves duplicate entries in the record.

use super::config::AssemblerConfig;
use super::input::EnrichmentInput;
use crate::record::{AnalysisEntry, AnalysisKind, AnalysisSchema};
use serde_json::Value;

/// Appends analysis entries in a fixed field order
pub struct AnalysisEnricher<'a> {
    config: &'a AssemblerConfig,
}

impl<'a> AnalysisEnricher<'a> {
    pub fn new(config: &'a AssemblerConfig) -> Self {
        Self { config }
    }

    /// Entries for every non-empty field of `input`, in order: summary,
    /// category, action items, key topics, key decisions.
    pub fn entries(&self, input: &EnrichmentInput) -> Vec<AnalysisEntry> {
        let vendor = input
            .source
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(self.config.default_vendor.as_str());

        let fields = [
            (AnalysisKind::Summary, AnalysisSchema::TextPlain, &input.summary),
            (AnalysisKind::Category, AnalysisSchema::TextPlain, &input.category),
            (AnalysisKind::ActionItems, AnalysisSchema::ApplicationJson, &input.action_items),
            (AnalysisKind::KeyTopics, AnalysisSchema::ApplicationJson, &input.key_topics),
            (AnalysisKind::KeyDecisions, AnalysisSchema::ApplicationJson, &input.key_decisions),
        ];

        fields
            .into_iter()
            .filter_map(|(kind, schema, value)| {
                let body = render_body(value.as_ref()?)?;
                Some(AnalysisEntry {
                    kind,
                    dialog: 0,
                    vendor: vendor.to_string(),
                    product: self.config.product.clone(),
                    schema,
                    body,
                    encoding: "utf-8".to_string(),
                })
            })
            .collect()
    }

    /// Append the entries for `input` to `analysis`, returning how many
    /// were added.
    pub fn append_to(&self, analysis: &mut Vec<AnalysisEntry>, input: &EnrichmentInput) -> usize {
        let entries = self.entries(input);
        let added = entries.len();
        analysis.extend(entries);
        added
    }
}

/// Text passes through; structured values are pretty-printed JSON.
/// Empty values, `false` and zero produce no body.
fn render_body(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => serde_json::to_string_pretty(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_follow_fixed_field_order() {
        let config = AssemblerConfig::default();
        let input = EnrichmentInput::new()
            .with_key_decisions(vec!["ship it"])
            .with_summary("A short summary")
            .with_key_topics(vec!["budget", "hiring"])
            .with_category("finance")
            .with_action_items(vec!["send numbers"]);

        let kinds: Vec<_> = AnalysisEnricher::new(&config)
            .entries(&input)
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                AnalysisKind::Summary,
                AnalysisKind::Category,
                AnalysisKind::ActionItems,
                AnalysisKind::KeyTopics,
                AnalysisKind::KeyDecisions,
            ]
        );
    }

    #[test]
    fn text_passes_through_and_structures_are_pretty_printed() {
        let config = AssemblerConfig::default();
        let input = EnrichmentInput::new()
            .with_summary("line one\nline two")
            .with_action_items(json!([{ "owner": "ana", "task": "review" }]));

        let entries = AnalysisEnricher::new(&config).entries(&input);
        assert_eq!(entries[0].body, "line one\nline two");
        assert_eq!(entries[0].schema, AnalysisSchema::TextPlain);
        assert_eq!(
            entries[1].body,
            "[\n  {\n    \"owner\": \"ana\",\n    \"task\": \"review\"\n  }\n]"
        );
        assert_eq!(entries[1].schema, AnalysisSchema::ApplicationJson);
    }

    #[test]
    fn empty_and_absent_fields_are_skipped() {
        let config = AssemblerConfig::default();
        let input = EnrichmentInput::new()
            .with_summary("")
            .with_category(Value::Null)
            .with_action_items(json!([]))
            .with_key_topics(json!({}));
        assert!(AnalysisEnricher::new(&config).entries(&input).is_empty());
    }

    #[test]
    fn false_and_zero_are_skipped() {
        let config = AssemblerConfig::default();
        let input = EnrichmentInput::new()
            .with_summary(false)
            .with_category(0)
            .with_action_items(json!(0.0))
            .with_key_topics(true);

        let entries = AnalysisEnricher::new(&config).entries(&input);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, AnalysisKind::KeyTopics);
        assert_eq!(entries[0].body, "true");
    }

    #[test]
    fn vendor_defaults_when_absent() {
        let config = AssemblerConfig::default();
        let entries = AnalysisEnricher::new(&config).entries(&EnrichmentInput::new().with_summary("s"));
        assert_eq!(entries[0].vendor, "llm");
        assert_eq!(entries[0].product, "vcon-forge");
        assert_eq!(entries[0].dialog, 0);
        assert_eq!(entries[0].encoding, "utf-8");

        let entries = AnalysisEnricher::new(&config)
            .entries(&EnrichmentInput::new().with_summary("s").with_vendor("gpt-4"));
        assert_eq!(entries[0].vendor, "gpt-4");
    }

    #[test]
    fn appending_twice_duplicates_entries() {
        let config = AssemblerConfig::default();
        let enricher = AnalysisEnricher::new(&config);
        let input = EnrichmentInput::new().with_summary("s");
        let mut analysis = Vec::new();

        assert_eq!(enricher.append_to(&mut analysis, &input), 1);
        assert_eq!(enricher.append_to(&mut analysis, &input), 1);
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0], analysis[1]);
    }
}
