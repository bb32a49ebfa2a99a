use std::rc::Rc;

use crate::{
    ast::{Expr, LambdaBody},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            statement::Signal,
        },
        scope::Scope,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a call of a named binding.
    ///
    /// The callee must resolve to a lambda value. Arguments evaluate left to
    /// right in the caller's scope; the activation scope is a fresh child of
    /// the caller's scope, not of the scope the lambda was written in, so
    /// free names in the body resolve against the call site.
    ///
    /// A block body yields the value of its first `return`; falling off the
    /// end of the block yields the untyped uninitialised sentinel. An
    /// expression body yields its value directly.
    ///
    /// # Parameters
    /// - `name`: The name of the called binding.
    /// - `args`: Argument expressions in source order.
    /// - `scope`: The caller's scope.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if:
    /// - the name is unbound or not a lambda,
    /// - the argument count does not match the parameter count,
    /// - the body fails to evaluate.
    pub fn eval_call(name: &str, args: &[Expr], scope: &Rc<Scope>) -> EvalResult<Rc<Value>> {
        let callee = scope.get_var(name)?;
        let Some(def) = callee.as_lambda() else {
            return Err(RuntimeError::NotCallable { name: name.to_string() });
        };

        if def.params.len() != args.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: def.params.len(),
                                                     found:    args.len(), });
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(Self::eval_expr(arg, scope)?);
        }

        let call_scope = Scope::child(scope);
        for (param, value) in def.params.iter().zip(values) {
            call_scope.define(param, value);
        }

        match &def.body {
            LambdaBody::Block(block) => match Self::eval(block, &call_scope)? {
                Signal::Return(value) => Ok(value),
                Signal::Normal => Ok(Value::untyped_uninit()),
            },
            LambdaBody::Expr(expr) => Self::eval_expr(expr, &call_scope),
        }
    }
}
