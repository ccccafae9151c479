use serde_json::{json, Value};

use crate::training_engine::models::{DrillPayload, GeneratedValue, TrainingScenario};

/// One side of a comparison as the UI draws it.
fn value_json(v: &GeneratedValue) -> Value {
    let mut out = json!({
        "kind": v.kind,
        "display": v.display,
    });
    if let Some(meta) = &v.meta {
        if let (Some(n), Some(d)) = (meta.numerator, meta.denominator) {
            out["numerator"] = json!(n);
            out["denominator"] = json!(d);
        }
    }
    out
}

/// Task-specific block the renderer switches on.
fn task_json(payload: &DrillPayload) -> Value {
    match payload {
        DrillPayload::Compare(ex) => json!({
            "type": "compare",
            "left": value_json(&ex.left),
            "right": value_json(&ex.right),
        }),
        DrillPayload::Arithmetic(t) => json!({
            "type": "arithmetic",
            "left": t.left,
            "right": t.right,
            "operator": t.operation.symbol(),
        }),
        DrillPayload::Rounding(t) => json!({
            "type": "rounding",
            "number": t.number,
            "place": t.place.as_u32(),
        }),
    }
}

/// Map a `TrainingScenario` to the JSON the browser client renders.
///
/// Correctness flags and explanations are withheld; the client asks for
/// them only after an answer is picked (see [`reveal_answer`]).
pub fn to_client_payload(scenario: &TrainingScenario) -> Value {
    let options: Vec<Value> = scenario
        .answers
        .iter()
        .map(|a| json!({ "id": a.id, "text": a.text }))
        .collect();

    json!({
        "scenarioId": scenario.scenario_id,
        "topic": scenario.topic.to_string(),
        "question": scenario.question,
        "task": task_json(&scenario.payload),
        "options": options,
    })
}

/// Verdict for an answer id: `None` if the id is not one of the options.
pub fn reveal_answer(scenario: &TrainingScenario, answer_id: &str) -> Option<Value> {
    let picked = scenario.answers.iter().find(|a| a.id == answer_id)?;
    let correct_id = scenario
        .answers
        .iter()
        .find(|a| a.is_correct)
        .map(|a| a.id.clone())
        .unwrap_or_default();
    Some(json!({
        "isCorrect": picked.is_correct,
        "explanation": picked.explanation,
        "correctId": correct_id,
    }))
}
