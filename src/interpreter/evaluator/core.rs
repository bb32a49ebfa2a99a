use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::operators::install_default_operators,
        scope::{OpKey, Scope},
        value::core::{Payload, TypeKind, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking interpreter.
///
/// Construction seeds the global scope with the primitive type singletons
/// and the default operator table; evaluation then walks AST nodes against
/// scopes chained to that root.
#[derive(Debug)]
pub struct Interpreter {
    /// The root scope every evaluation chains back to.
    pub global_scope: Rc<Scope>,
}

impl Interpreter {
    /// Creates an interpreter with a freshly seeded global scope.
    ///
    /// Seeding binds the self-typed `type` primitive, then the `int`,
    /// `float`, `bool` and `lambda` primitives (each typed `type`), and
    /// installs the default operator table against those singletons.
    #[must_use]
    pub fn new() -> Self {
        let global_scope = Scope::global();

        let type_type = Value::self_typed_type();
        global_scope.define("type", Rc::clone(&type_type));

        let primitive = |name: &str| {
            Value::new(Payload::Type(TypeKind::Primitive(name.to_string())),
                       Rc::clone(&type_type))
        };

        let int_type = primitive("int");
        global_scope.define("int", Rc::clone(&int_type));

        let float_type = primitive("float");
        global_scope.define("float", Rc::clone(&float_type));

        global_scope.define("bool", primitive("bool"));
        global_scope.define("lambda", primitive("lambda"));

        install_default_operators(&global_scope, &int_type, &float_type);

        Self { global_scope }
    }

    /// The global bindings as `(name, value)` pairs, sorted by name.
    ///
    /// This is the observable output of a run; the seeded type primitives
    /// appear alongside the program's own bindings.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, Rc<Value>)> {
        let mut bindings = self.global_scope.bindings();
        bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
        bindings
    }

    /// Evaluates an expression against a scope and returns the resulting
    /// value.
    ///
    /// Dispatch follows the expression variant. Literals take their type
    /// from the primitive singletons resolved through the scope chain, so
    /// operator dispatch by type identity works from any nesting depth.
    /// Operands of binary applications evaluate strictly left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The scope the expression reads from.
    ///
    /// # Errors
    /// Any failure is fatal to the run: unknown variables, missing operator
    /// implementations, malformed calls, or uses of uninitialised values.
    pub fn eval_expr(expr: &Expr, scope: &Rc<Scope>) -> EvalResult<Rc<Value>> {
        match expr {
            Expr::Var { name, .. } => scope.get_var(name),
            Expr::Int { value, .. } => {
                Ok(Value::new(Payload::Int(*value), scope.atomic_type("int")?))
            },
            Expr::Float { value, .. } => {
                Ok(Value::new(Payload::Float(*value), scope.atomic_type("float")?))
            },
            Expr::Bool { value, .. } => {
                Ok(Value::new(Payload::Bool(*value), scope.atomic_type("bool")?))
            },
            Expr::Unary { op, operand, .. } => {
                let value = Self::eval_expr(operand, scope)?;
                let key = OpKey::unary(op, Rc::clone(value.type_of()?));
                let op_fn = scope.get_op(&key)?;
                (*op_fn)(None, &value)
            },
            Expr::Binary { op, lhs, rhs, .. } => {
                let lhs = Self::eval_expr(lhs, scope)?;
                let rhs = Self::eval_expr(rhs, scope)?;
                let key = OpKey::binary(op, Rc::clone(lhs.type_of()?), Rc::clone(rhs.type_of()?));
                let op_fn = scope.get_op(&key)?;
                (*op_fn)(Some(&lhs), &rhs)
            },
            Expr::Tuple { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(Self::eval_expr(element, scope)?);
                }

                let mut element_types = Vec::with_capacity(values.len());
                for value in &values {
                    element_types.push(Rc::clone(value.type_of()?));
                }

                let tuple_type = Value::new(Payload::Type(TypeKind::Product(element_types)),
                                            scope.atomic_type("type")?);
                Ok(Value::new(Payload::Tuple(values), tuple_type))
            },
            Expr::Call { name, args, .. } => Self::eval_call(name, args, scope),
            Expr::Lambda { def, .. } => {
                Ok(Value::new(Payload::Lambda(Rc::clone(def)), scope.atomic_type("lambda")?))
            },
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
