use rayon::prelude::*;
use veccalc::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn vectors_are_send_and_sync() {
    assert_send_sync::<Vector<f64>>();
    assert_send_sync::<Error>();
}

#[test]
fn parallel_callers_agree_with_sequential() -> anyhow::Result<()> {
    let axis = Vector::from([1.0, 2.0, 2.0]);
    let inputs: Vec<Vector<f64>> = (0..1000)
        .map(|i| {
            let i = i as f64;
            Vector::from([i, -i * 0.5, 3.0 - i])
        })
        .collect();

    let sequential = inputs
        .iter()
        .map(|v| project(v, &axis))
        .collect::<Result<Vec<_>>>()?;
    // Every worker reads the same `axis`.
    let parallel = inputs
        .par_iter()
        .map(|v| project(v, &axis))
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(sequential, parallel);

    let crosses = inputs
        .par_iter()
        .map(|v| cross_product(v, &axis))
        .collect::<Result<Vec<_>>>()?;
    crosses.par_iter().try_for_each(|c| -> Result<()> {
        assert_approx_eq!(dot(c, &axis)?, 0.0).abs(1e-9);
        Ok(())
    })?;
    Ok(())
}

#[test]
fn parallel_errors_are_reported() {
    let axis = Vector::<f64>::zero(3);
    let res = (0..64)
        .into_par_iter()
        .map(|i| unit(&Vector::from([i as f64, 0.0, 0.0])).and_then(|u| project(&u, &axis)))
        .collect::<Result<Vec<_>>>();
    assert_eq!(res, Err(Error::DegenerateVector));
}
