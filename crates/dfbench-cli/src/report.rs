//! Serializable form of a pipeline report for `--format json`.

use serde::Serialize;

use dfbench_core::aggregate::{GroupMean, Precision};
use dfbench_core::cache::CacheStatus;
use dfbench_orchestration::interfaces::{Agreement, EngineRun, PipelineReport};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub rows: usize,
    pub generation_secs: f64,
    pub cache: CacheStatus,
    pub engines: Vec<JsonEngine<'a>>,
    pub agreement: JsonAgreement<'a>,
}

#[derive(Debug, Serialize)]
pub struct JsonEngine<'a> {
    pub engine: &'a str,
    pub label: &'a str,
    pub rows: usize,
    pub load_secs: f64,
    pub execution_secs: f64,
    pub precision: Precision,
    pub groups: &'a [GroupMean],
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum JsonAgreement<'a> {
    Verified,
    Mismatch(&'a str),
    NotChecked,
}

impl<'a> From<&'a EngineRun> for JsonEngine<'a> {
    fn from(run: &'a EngineRun) -> Self {
        Self {
            engine: &run.engine,
            label: &run.label,
            rows: run.rows,
            load_secs: run.load_duration.as_secs_f64(),
            execution_secs: run.duration.as_secs_f64(),
            precision: run.result.precision(),
            groups: run.result.groups(),
        }
    }
}

impl<'a> From<&'a Agreement> for JsonAgreement<'a> {
    fn from(agreement: &'a Agreement) -> Self {
        match agreement {
            Agreement::Verified => Self::Verified,
            Agreement::Mismatch(detail) => Self::Mismatch(detail),
            Agreement::NotChecked => Self::NotChecked,
        }
    }
}

impl<'a> From<&'a PipelineReport> for JsonReport<'a> {
    fn from(report: &'a PipelineReport) -> Self {
        Self {
            rows: report.generation.rows,
            generation_secs: report.generation.elapsed.as_secs_f64(),
            cache: report.generation.cache,
            engines: report.runs.iter().map(JsonEngine::from).collect(),
            agreement: JsonAgreement::from(&report.agreement),
        }
    }
}

/// Pretty-printed JSON for a report.
pub fn to_json(report: &PipelineReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use dfbench_core::aggregate::AggregateResult;
    use dfbench_orchestration::interfaces::GenerationReport;

    fn report(agreement: Agreement) -> PipelineReport {
        PipelineReport {
            generation: GenerationReport {
                rows: 100,
                elapsed: Duration::from_millis(500),
                cache: CacheStatus::Hit,
            },
            runs: vec![EngineRun {
                engine: "arrow".into(),
                label: "Arrow".into(),
                rows: 100,
                load_duration: Duration::from_millis(1),
                duration: Duration::from_millis(250),
                result: AggregateResult::new(
                    vec![GroupMean {
                        first_letter: 'Q',
                        mean_salary: 41_000.5,
                    }],
                    Precision::Single,
                ),
            }],
            agreement,
        }
    }

    #[test]
    fn json_shape() {
        let json = to_json(&report(Agreement::Verified)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 100);
        assert_eq!(value["generation_secs"], 0.5);
        assert_eq!(value["cache"], "hit");
        assert_eq!(value["engines"][0]["engine"], "arrow");
        assert_eq!(value["engines"][0]["precision"], "single");
        assert_eq!(value["engines"][0]["execution_secs"], 0.25);
        assert_eq!(value["engines"][0]["groups"][0]["first_letter"], "Q");
        assert_eq!(value["engines"][0]["groups"][0]["mean_salary"], 41_000.5);
        assert_eq!(value["agreement"]["status"], "verified");
    }

    #[test]
    fn mismatch_carries_detail() {
        let json = to_json(&report(Agreement::Mismatch("arrow: Q differs".into()))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["agreement"]["status"], "mismatch");
        assert_eq!(value["agreement"]["detail"], "arrow: Q differs");
    }
}
