use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        scope::{OpFn, OpKey, Scope},
        value::core::{Payload, Value},
    },
};

/// Unwraps the left operand of a binary application.
///
/// Implementations registered under binary keys are only reachable through
/// binary dispatch, which always supplies both operands.
fn binary_operand<'a>(lhs: Option<&'a Rc<Value>>) -> EvalResult<&'a Rc<Value>> {
    lhs.ok_or(RuntimeError::TypeMismatch { expected: "two operands",
                                           found:    "one".to_string(), })
}

/// Installs the default operator table into `scope`.
///
/// For integer pairs the table carries `+`, `-` and `*` as wrapping 32-bit
/// arithmetic together with the named `div` and `mod` operators for integer
/// division and remainder. Every pair over `int` and `float` that contains
/// at least one `float` carries `+`, `-`, `*` and `/`, implemented by
/// widening each operand to a float first. Unary `-` is registered for both
/// numeric primitives.
///
/// All keys are built against the primitive singletons passed in, so
/// dispatch by type identity resolves these entries from any descendant
/// scope.
pub fn install_default_operators(scope: &Rc<Scope>,
                                 int_type: &Rc<Value>,
                                 float_type: &Rc<Value>) {
    let int_arith = |f: fn(i32, i32) -> EvalResult<i32>| -> OpFn {
        let int_type = Rc::clone(int_type);
        Rc::new(move |lhs: Option<&Rc<Value>>, rhs: &Rc<Value>| {
            let a = binary_operand(lhs)?.as_int()?;
            let b = rhs.as_int()?;
            Ok(Value::new(Payload::Int(f(a, b)?), Rc::clone(&int_type)))
        })
    };

    scope.set_op(OpKey::binary("+", Rc::clone(int_type), Rc::clone(int_type)),
                 int_arith(|a, b| Ok(a.wrapping_add(b))));
    scope.set_op(OpKey::binary("-", Rc::clone(int_type), Rc::clone(int_type)),
                 int_arith(|a, b| Ok(a.wrapping_sub(b))));
    scope.set_op(OpKey::binary("*", Rc::clone(int_type), Rc::clone(int_type)),
                 int_arith(|a, b| Ok(a.wrapping_mul(b))));
    scope.set_op(OpKey::binary("div", Rc::clone(int_type), Rc::clone(int_type)),
                 int_arith(|a, b| {
                     if b == 0 {
                         return Err(RuntimeError::DivisionByZero);
                     }
                     Ok(a.wrapping_div(b))
                 }));
    scope.set_op(OpKey::binary("mod", Rc::clone(int_type), Rc::clone(int_type)),
                 int_arith(|a, b| {
                     if b == 0 {
                         return Err(RuntimeError::DivisionByZero);
                     }
                     Ok(a.wrapping_rem(b))
                 }));

    let float_arith = |f: fn(f32, f32) -> f32| -> OpFn {
        let float_type = Rc::clone(float_type);
        Rc::new(move |lhs: Option<&Rc<Value>>, rhs: &Rc<Value>| {
            let a = binary_operand(lhs)?.as_widened_float()?;
            let b = rhs.as_widened_float()?;
            Ok(Value::new(Payload::Float(f(a, b)), Rc::clone(&float_type)))
        })
    };

    let mixed_pairs = [(int_type, float_type), (float_type, int_type), (float_type, float_type)];

    for (lhs_type, rhs_type) in mixed_pairs {
        scope.set_op(OpKey::binary("+", Rc::clone(lhs_type), Rc::clone(rhs_type)),
                     float_arith(|a, b| a + b));
        scope.set_op(OpKey::binary("-", Rc::clone(lhs_type), Rc::clone(rhs_type)),
                     float_arith(|a, b| a - b));
        scope.set_op(OpKey::binary("*", Rc::clone(lhs_type), Rc::clone(rhs_type)),
                     float_arith(|a, b| a * b));
        scope.set_op(OpKey::binary("/", Rc::clone(lhs_type), Rc::clone(rhs_type)),
                     float_arith(|a, b| a / b));
    }

    let negate_int: OpFn = {
        let int_type = Rc::clone(int_type);
        Rc::new(move |_lhs: Option<&Rc<Value>>, value: &Rc<Value>| {
            Ok(Value::new(Payload::Int(value.as_int()?.wrapping_neg()), Rc::clone(&int_type)))
        })
    };
    scope.set_op(OpKey::unary("-", Rc::clone(int_type)), negate_int);

    let negate_float: OpFn = {
        let float_type = Rc::clone(float_type);
        Rc::new(move |_lhs: Option<&Rc<Value>>, value: &Rc<Value>| {
            Ok(Value::new(Payload::Float(-value.as_float()?), Rc::clone(&float_type)))
        })
    };
    scope.set_op(OpKey::unary("-", Rc::clone(float_type)), negate_float);
}
