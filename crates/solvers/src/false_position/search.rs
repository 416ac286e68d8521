use std::time::Instant;

use rootlab_core::{Function, Observer};

use crate::{Measure, evaluate::evaluate};

use super::{
    Action, Config, Error, Event, Record, Solution, Status,
    bracket::{Bracket, ordered},
    record::Raw,
};

/// Core Illinois false position loop.
pub(super) fn search<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let start = Instant::now();

    let [a, b] = ordered(bracket)?;
    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;
    let mut bracket = Bracket::new(a, b, fa, fb)?;

    let mut records = Vec::with_capacity(config.max_iters().min(64));
    let mut previous: Option<f64> = None;
    let mut iteration = 0;

    loop {
        iteration += 1;

        let xr = bracket.estimate();
        let fxr = evaluate(f, xr)?;

        let step = previous.map(|p| (xr - p).abs());
        let relative = step.map_or(Measure::NotApplicable, |s| Measure::relative_percent(s, xr));

        let record = Record::new(
            iteration,
            &Raw {
                a: bracket.a.x,
                b: bracket.b.x,
                xr,
                fa: bracket.a.fx,
                fb: bracket.b.fx,
                fxr,
                absolute_error: Measure::from(step),
                relative_error: relative,
            },
        );
        let action = observer.observe(&Event {
            record: &record,
            xr,
            fxr,
        });
        records.push(record);

        let status = if fxr.abs() < config.tolerance() || relative.is_below(config.tolerance()) {
            Some(Status::Converged)
        } else if action == Some(Action::StopEarly) {
            Some(Status::StoppedByObserver)
        } else if iteration >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                root: xr,
                function_value: fxr,
                records,
                elapsed: start.elapsed(),
            });
        }

        bracket.update(xr, fxr);
        previous = Some(xr);
    }
}
