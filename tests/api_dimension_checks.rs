#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
use ipqp::{algebra::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>) {
    let P = Matrix::<f64>::identity(4);
    let G = Matrix::<f64>::zeros((6, 4));
    let c = vec![0.; 4];
    let h = vec![1.; 6];
    (P, G, c, h)
}

fn quiet() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (P, G, c, h) = api_dim_check_data();
    assert!(DefaultSolver::new(&P, &G, &c, &h, quiet()).is_ok());
}

#[test]
fn api_dim_check_bad_P() {
    let (_P, G, c, h) = api_dim_check_data();
    let P = Matrix::<f64>::identity(3);

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            field: "P rows",
            expected: 4,
            found: 3
        }
    ));
}

#[test]
fn api_dim_check_P_not_square() {
    let (_P, G, c, h) = api_dim_check_data();
    let P = Matrix::<f64>::zeros((4, 3));

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            field: "P columns",
            ..
        }
    ));
}

#[test]
fn api_dim_check_bad_G_rows() {
    let (P, _G, c, h) = api_dim_check_data();
    let G = Matrix::<f64>::zeros((5, 4));

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            field: "G rows",
            expected: 6,
            found: 5
        }
    ));
}

#[test]
fn api_dim_check_bad_G_cols() {
    let (P, _G, c, h) = api_dim_check_data();
    let G = Matrix::<f64>::zeros((6, 3));

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            field: "G columns",
            ..
        }
    ));
}

#[test]
fn api_dim_check_bad_data_length() {
    let (_P, G, c, h) = api_dim_check_data();
    let P = Matrix {
        m: 4,
        n: 4,
        data: vec![0.; 15],
    };

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(err, SolverError::BadProblemData(_)));
}

#[test]
fn api_check_nonfinite_data() {
    let (P, G, c, mut h) = api_dim_check_data();
    h[2] = f64::NAN;

    let err = DefaultSolver::new(&P, &G, &c, &h, quiet()).err().unwrap();
    assert!(matches!(err, SolverError::BadProblemData(_)));
}

#[test]
fn api_check_bad_settings() {
    let (P, G, c, h) = api_dim_check_data();

    let settings = DefaultSettings {
        max_step_fraction: 1.5,
        verbose: false,
        ..DefaultSettings::default()
    };
    let err = DefaultSolver::new(&P, &G, &c, &h, settings).err().unwrap();
    assert!(matches!(
        err,
        SolverError::Settings(SettingsError::BadFieldValue("max_step_fraction"))
    ));

    // the builder rejects the same value
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_feas(-1.)
        .build()
        .is_err());
}
