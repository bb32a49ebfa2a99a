/// Numeric conversion helpers.
///
/// This module provides the conversion routines shared by the parser and the
/// evaluator, covering the deliberate narrowing of integer literals and the
/// widening of integers for mixed arithmetic.
pub mod num;
