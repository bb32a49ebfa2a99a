use std::rc::Rc;

use crate::{
    ast::TypeExpr,
    interpreter::{
        evaluator::core::EvalResult,
        scope::Scope,
        value::core::{Payload, TypeKind, Value},
    },
};

/// Resolves a type annotation to a runtime type value.
///
/// Atomic names resolve through the scope chain to the type values bound
/// there, so the primitive singletons installed at construction are what
/// every annotation ultimately points at. Composite annotations build fresh
/// type values, typed `type`, over their resolved children.
///
/// # Parameters
/// - `node`: The annotation to resolve.
/// - `scope`: The scope names resolve against.
///
/// # Returns
/// A value whose payload is the resolved [`TypeKind`].
///
/// # Errors
/// Returns a `RuntimeError` if a name is unbound or resolves to a value
/// that is not a type.
pub fn resolve_type(node: &TypeExpr, scope: &Rc<Scope>) -> EvalResult<Rc<Value>> {
    match node {
        TypeExpr::Atomic { name, .. } => scope.atomic_type(name),
        TypeExpr::Product(parts) => {
            let mut types = Vec::with_capacity(parts.len());
            for part in parts {
                types.push(resolve_type(part, scope)?);
            }
            Ok(Value::new(Payload::Type(TypeKind::Product(types)), scope.atomic_type("type")?))
        },
        TypeExpr::Sum(parts) => {
            let mut types = Vec::with_capacity(parts.len());
            for part in parts {
                types.push(resolve_type(part, scope)?);
            }
            Ok(Value::new(Payload::Type(TypeKind::Sum(types)), scope.atomic_type("type")?))
        },
        TypeExpr::Map { domain, codomain } => {
            let domain = resolve_type(domain, scope)?;
            let codomain = resolve_type(codomain, scope)?;
            Ok(Value::new(Payload::Type(TypeKind::Map { domain, codomain }),
                          scope.atomic_type("type")?))
        },
    }
}
