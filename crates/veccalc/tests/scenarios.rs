use veccalc::*;

#[test]
fn addition() -> anyhow::Result<()> {
    let sum = add(&Vector::from([1.0, 2.0, 3.0]), &Vector::from([4.0, 5.0, 6.0]))?;
    assert_eq!(sum, [5.0, 7.0, 9.0]);
    Ok(())
}

#[test]
fn addition_dimension_mismatch() {
    let res = add(&Vector::from([1.0, 2.0]), &Vector::from([1.0, 2.0, 3.0]));
    assert_eq!(res, Err(Error::DimensionMismatch { left: 2, right: 3 }));

    let res = subtract(&Vector::from([1.0, 2.0]), &Vector::from([1.0, 2.0, 3.0]));
    assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
}

#[test]
fn orthogonal_axes() -> anyhow::Result<()> {
    let x = Vector::from([1.0, 0.0, 0.0]);
    let y = Vector::from([0.0, 1.0, 0.0]);
    assert_eq!(dot(&x, &y)?, 0.0);
    assert!(is_orthogonal(&x, &y)?);
    assert!(!is_orthogonal(&x, &x)?);
    Ok(())
}

#[test]
fn length_3_4_5() {
    assert_eq!(length(&Vector::from([3.0, 4.0])), 5.0);
    assert_eq!(length(&Vector::<f64>::zero(4)), 0.0);
}

#[test]
fn right_angle() -> anyhow::Result<()> {
    let angle = angle_between(&Vector::from([1.0, 0.0]), &Vector::from([0.0, 1.0]))?;
    assert_approx_eq!(angle, 90.0);
    Ok(())
}

#[test]
fn angle_of_zero_vector() {
    let zero = Vector::from([0.0, 0.0]);
    let x = Vector::from([1.0, 0.0]);
    assert_eq!(angle_between(&zero, &x), Err(Error::DegenerateVector));
    assert_eq!(angle_between(&x, &zero), Err(Error::DegenerateVector));
}

#[test]
fn cross_of_axes() -> anyhow::Result<()> {
    let z = cross_product(&Vector::from([1.0, 0.0, 0.0]), &Vector::from([0.0, 1.0, 0.0]))?;
    assert_eq!(z, [0.0, 0.0, 1.0]);
    Ok(())
}

#[test]
fn cross_requires_3d() {
    let res = cross_product(&Vector::from([1.0, 2.0]), &Vector::from([3.0, 4.0]));
    assert_eq!(
        res,
        Err(Error::InvalidDimension {
            expected: 3,
            actual: 2
        })
    );

    let res = cross_product(&Vector::from([1.0, 2.0, 3.0]), &Vector::from([3.0, 4.0]));
    assert!(matches!(res, Err(Error::InvalidDimension { actual: 2, .. })));
}

#[test]
fn projection_onto_x_axis() -> anyhow::Result<()> {
    let a = Vector::from([3.0, 4.0]);
    let x = Vector::from([1.0, 0.0]);
    assert_eq!(project(&a, &x)?, [3.0, 0.0]);
    assert_eq!(orthogonal_component(&a, &x)?, [0.0, 4.0]);
    Ok(())
}

#[test]
fn degenerate_inputs() {
    let zero = Vector::<f64>::zero(3);
    let a = Vector::from([1.0, 2.0, 3.0]);
    assert_eq!(unit(&zero), Err(Error::DegenerateVector));
    assert_eq!(project(&a, &zero), Err(Error::DegenerateVector));
    assert_eq!(orthogonal_component(&a, &zero), Err(Error::DegenerateVector));
    assert_eq!(is_parallel(&zero, &a), Err(Error::DegenerateVector));

    // Projecting the zero vector onto something is fine.
    assert_eq!(project(&zero, &a), Ok(Vector::zero(3)));
    assert_eq!(is_orthogonal(&zero, &a), Ok(true));
}

#[test]
fn parallel_is_same_direction_only() -> anyhow::Result<()> {
    let a = Vector::from([2.0, 0.0, 0.0]);
    let b = Vector::from([5.0, 0.0, 0.0]);
    assert!(is_parallel(&a, &b)?);
    assert!(!is_parallel(&a, &scale(-1.0, &b))?);
    assert!(!is_parallel_approx(&a, &scale(-1.0, &b))?);
    Ok(())
}

#[test]
fn errors_display() {
    let err = dot(&Vector::from([1]), &Vector::from([1, 2])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "dimension mismatch: left operand has 1 elements, right operand has 2"
    );

    let err: anyhow::Error = unit(&Vector::from([0.0f32])).unwrap_err().into();
    assert!(err.to_string().contains("degenerate vector"));
}
