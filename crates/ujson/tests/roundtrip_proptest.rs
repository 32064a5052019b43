use proptest::prelude::*;
use ujson::{parse, parse_str, serialize, Object, Value};

fn value_strategy<S>(string: S) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = String> + Clone + 'static,
{
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        string.clone().prop_map(Value::String),
    ];

    leaf.prop_recursive(6, 128, 8, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((string.clone(), inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    /// Any tree survives serialize -> parse unchanged.
    #[test]
    fn parse_of_serialize_round_trips(value in value_strategy(any::<String>())) {
        let text = serialize(&value);
        prop_assert_eq!(parse(&text), Ok(value));
    }

    /// Compact text written by serde_json reads back as the same tree.
    #[test]
    fn reads_serde_json_output(value in value_strategy("[^\\x00-\\x1f]*")) {
        let text = serde_json::to_string(&serde_json::Value::from(value.clone())).unwrap();
        prop_assert_eq!(parse_str(&text), Ok(value));
    }

    /// Arbitrary bytes either parse or fail cleanly.
    #[test]
    fn never_panics_on_garbage(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse(&bytes);
    }
}
