use rootlab_core::Function;

/// Ways a single evaluation can fail.
#[derive(Debug)]
pub(crate) enum EvalError<E> {
    /// The function itself returned an error.
    Failed(E),

    /// The function returned NaN or an infinity.
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `f` at `x`, rejecting non-finite results.
pub(crate) fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, EvalError<F::Error>> {
    let value = f.call(x).map_err(EvalError::Failed)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x, value })
    }
}
