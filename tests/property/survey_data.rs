//! Property-based tests for survey data counting and filtering

use clinview::model::{FieldRecord, SurveyData};
use proptest::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;

fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::String(String::new())),
        "[a-z ]{1,12}".prop_map(Value::String),
        any::<i32>().prop_map(|n| Value::from(n)),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn field_record() -> impl Strategy<Value = FieldRecord> {
    (field_value(), proptest::option::of("[A-Za-z ]{0,16}")).prop_map(
        |(value, question_description)| FieldRecord {
            value,
            question_description,
        },
    )
}

fn survey_data() -> impl Strategy<Value = SurveyData> {
    let fields = proptest::collection::btree_map("[A-Z][0-9]{3}", field_record(), 0..6);
    let categories = proptest::collection::btree_map("[A-Z][a-z]{2,8}", fields, 0..4);
    proptest::collection::btree_map(
        prop_oneof![Just("SOC"), Just("RN"), Just("PTVIS"), Just("DC")].prop_map(String::from),
        categories,
        0..3,
    )
    .prop_map(SurveyData)
}

fn count_by_hand(data: &SurveyData) -> usize {
    let mut count = 0;
    for categories in data.0.values() {
        for fields in categories.values() {
            for record in fields.values() {
                let answered = match &record.value {
                    Value::Null => false,
                    Value::String(s) => !s.is_empty(),
                    _ => true,
                };
                if answered {
                    count += 1;
                }
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn answered_count_matches_answered_questions(data in survey_data()) {
        prop_assert_eq!(data.answered_count(), data.answered_questions().len());
        prop_assert_eq!(data.answered_count(), count_by_hand(&data));
    }

    #[test]
    fn without_unanswered_keeps_every_answer(data in survey_data()) {
        let filtered = data.without_unanswered();
        prop_assert_eq!(filtered.answered_questions(), data.answered_questions());
        prop_assert!(filtered
            .0
            .values()
            .flat_map(|c| c.values())
            .flat_map(|f| f.values())
            .all(|r| r.is_answered()));
    }

    #[test]
    fn without_unanswered_keeps_skeleton(data in survey_data()) {
        let filtered = data.without_unanswered();
        let skeleton = |d: &SurveyData| -> BTreeMap<String, Vec<String>> {
            d.0.iter()
                .map(|(k, c)| (k.clone(), c.keys().cloned().collect()))
                .collect()
        };
        prop_assert_eq!(skeleton(&filtered), skeleton(&data));
        prop_assert_eq!(filtered.without_unanswered(), filtered.clone());
    }
}
