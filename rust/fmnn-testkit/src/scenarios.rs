//! Fixed input/answer pairs shared by the test suites.

use fmnn_value::Value;

/// A named input sequence with its known answer.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub values: Vec<Value>,
    pub expected: usize,
}

fn integers(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Integer).collect()
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

/// All scenarios, from the empty sequence to mixed content with duplicates.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "empty",
            values: vec![],
            expected: 0,
        },
        Scenario {
            name: "single zero",
            values: integers(&[0]),
            expected: 1,
        },
        Scenario {
            name: "identity",
            values: integers(&[0, 1, 2, 3]),
            expected: 4,
        },
        Scenario {
            name: "permutation",
            values: integers(&[1, 3, 2, 0]),
            expected: 4,
        },
        Scenario {
            name: "gap",
            values: integers(&[4, 1, 0, 5]),
            expected: 2,
        },
        Scenario {
            name: "digits as text",
            values: "123456789".chars().map(|c| text(&c.to_string())).collect(),
            expected: 0,
        },
        Scenario {
            name: "duplicates and large values",
            values: integers(&[
                0, 101, 1, 103, 0, 100, 101, 100, 2, 4, 0, 2, 1, 1, 103, 2, 0, 1,
            ]),
            expected: 3,
        },
        Scenario {
            name: "mixed with text",
            values: vec![
                Value::Integer(7),
                Value::Integer(5),
                Value::Integer(8),
                Value::Integer(0),
                Value::Integer(3),
                text("x"),
                Value::Integer(1),
                Value::Integer(15),
                Value::Integer(2),
                Value::Integer(5),
                Value::Integer(2),
                Value::Integer(0),
                Value::Integer(1),
                Value::Integer(5),
                text("y"),
            ],
            expected: 4,
        },
        Scenario {
            name: "mixed with floats and negatives",
            values: vec![
                Value::Integer(7),
                Value::Integer(5),
                Value::Integer(8),
                Value::Integer(0),
                Value::Integer(3),
                text("toto"),
                Value::Integer(1),
                Value::Integer(150000),
                Value::Integer(2),
                Value::Float(6.25),
                Value::Integer(5),
                Value::Integer(-6),
                Value::Integer(2),
                Value::Integer(0),
                Value::Integer(1),
                Value::Integer(5),
                text("caca"),
            ],
            expected: 4,
        },
        Scenario {
            name: "integral floats are not integers",
            values: vec![Value::Float(0.0), Value::Integer(1), Value::Float(2.0)],
            expected: 0,
        },
    ]
}
