use crate::object::{EvaluationError, Value};

/// A built-in reducer over integers. `None` signals that the checked
/// arithmetic overflowed.
#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: fn(&[i64]) -> Option<i64>,
}

impl BuiltinFunction {
    /// Arguments are converted to integers before the function runs; the
    /// first non-integer fails the call.
    pub fn call(&self, arguments: &[Value]) -> Result<Value, EvaluationError> {
        let arguments = arguments
            .iter()
            .map(Value::as_integer)
            .collect::<Result<Vec<_>, _>>()?;

        match (self.func)(&arguments) {
            Some(result) => Ok(Value::Integer(result)),
            None => Err(EvaluationError::IntegerOverflow {
                function: self.name.into(),
            }),
        }
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .finish()
    }
}

fn builtin_sum(args: &[i64]) -> Option<i64> {
    args.iter().try_fold(0i64, |acc, value| acc.checked_add(*value))
}

pub(crate) fn builtins() -> Vec<BuiltinFunction> {
    vec![BuiltinFunction {
        name: "+",
        func: builtin_sum,
    }]
}

#[cfg(test)]
mod tests {
    use super::{builtin_sum, builtins};
    use crate::object::{EvaluationError, Value, ValueKind};

    #[test]
    fn test_sum() {
        let tests = vec![
            (vec![], Some(0)),
            (vec![5], Some(5)),
            (vec![1, 2, 999], Some(1002)),
            (vec![i64::MAX, 0], Some(i64::MAX)),
            (vec![i64::MAX, 1], None),
        ];

        for (input, expected) in tests {
            assert_eq!(builtin_sum(&input), expected);
        }
    }

    #[test]
    fn test_call() {
        let plus = builtins().remove(0);

        assert_eq!(
            plus.call(&[Value::Integer(1), Value::Integer(2)]),
            Ok(Value::Integer(3))
        );
        assert_eq!(plus.call(&[]), Ok(Value::Integer(0)));
        assert_eq!(
            plus.call(&[Value::Integer(1), Value::symbol("x")]),
            Err(EvaluationError::TypeMismatch {
                expected: ValueKind::Integer,
                got: Value::symbol("x"),
            })
        );
        assert_eq!(
            plus.call(&[Value::Integer(i64::MAX), Value::Integer(1)]),
            Err(EvaluationError::IntegerOverflow {
                function: "+".into()
            })
        );
    }
}
