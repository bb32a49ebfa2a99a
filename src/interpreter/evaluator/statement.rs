use std::rc::Rc;

use crate::{
    ast::Stmt,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            types::resolve_type,
        },
        scope::Scope,
        value::core::Value,
    },
};

/// The control signal produced by statement evaluation.
///
/// Blocks short-circuit on the first `Return` and propagate it outwards
/// until a lambda call consumes it. Every other statement yields `Normal`.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The statement completed without producing a result.
    Normal,
    /// An explicit `return` carrying its value towards the enclosing call.
    Return(Rc<Value>),
}

impl Interpreter {
    /// Runs a whole program against the global scope.
    ///
    /// The root block is the program's main block: its statements evaluate
    /// directly in the global scope so their bindings become the observable
    /// output, and any `return` escaping to the top level is consumed and
    /// discarded with execution continuing at the next statement.
    ///
    /// # Parameters
    /// - `program`: The root block produced by the parser.
    ///
    /// # Errors
    /// Propagates the first runtime error; there is no recovery.
    pub fn run(&self, program: &Stmt) -> EvalResult<()> {
        match program {
            Stmt::Block(statements) => {
                for statement in statements {
                    let _ = Self::eval(statement, &self.global_scope)?;
                }
                Ok(())
            },
            statement => Self::eval(statement, &self.global_scope).map(|_| ()),
        }
    }

    /// Evaluates a single statement against a scope.
    ///
    /// Entering a nested block creates a child scope that is dropped when
    /// the block ends, so declarations inside it shadow and then disappear.
    /// Declarations pre-bind their name to the uninitialised sentinel
    /// carrying the declared type before evaluating the initializer, and
    /// assignments overwrite the nearest binding in the scope chain.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `scope`: The scope the statement reads from and writes to.
    ///
    /// # Returns
    /// The control [`Signal`] for the enclosing block.
    ///
    /// # Errors
    /// Any type-resolution or evaluation failure aborts the run.
    pub fn eval(statement: &Stmt, scope: &Rc<Scope>) -> EvalResult<Signal> {
        match statement {
            Stmt::Block(statements) => {
                let block_scope = Scope::child(scope);
                for statement in statements {
                    if let Signal::Return(value) = Self::eval(statement, &block_scope)? {
                        return Ok(Signal::Return(value));
                    }
                }
                Ok(Signal::Normal)
            },
            Stmt::Declare { name, ty, init, .. } => {
                let declared = resolve_type(ty, scope)?;
                scope.init_var(name, declared);

                if let Some(init) = init {
                    let value = Self::eval_expr(init, scope)?;
                    scope.set_var(name, value)?;
                }
                Ok(Signal::Normal)
            },
            Stmt::Assign { name, value, .. } => {
                let value = Self::eval_expr(value, scope)?;
                scope.set_var(name, value)?;
                Ok(Signal::Normal)
            },
            Stmt::Return { value, .. } => Ok(Signal::Return(Self::eval_expr(value, scope)?)),
            Stmt::Expression { expr, .. } => {
                Self::eval_expr(expr, scope)?;
                Ok(Signal::Normal)
            },
        }
    }
}
