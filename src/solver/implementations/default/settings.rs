use crate::solver::core::traits::Settings;
use crate::{algebra::*, solver::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard-form solver type implementing the [`Settings`](crate::solver::core::traits::Settings) trait

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "100")]
    pub max_iter: u32,

    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,

    ///maximum interior point step length
    #[builder(default = "(0.99).as_T()")]
    pub max_step_fraction: T,

    ///absolute duality gap tolerance
    #[builder(default = "(1e-10).as_T()")]
    pub tol_gap_abs: T,

    ///relative duality gap tolerance
    #[builder(default = "(1e-10).as_T()")]
    pub tol_gap_rel: T,

    ///feasibility check tolerance (primal and dual)
    #[builder(default = "(1e-8).as_T()")]
    pub tol_feas: T,

    ///bracket tolerance for the step length root search
    #[builder(default = "(2e-12).as_T()")]
    pub rootfinding_tol: T,

    ///maximum iterations for the step length root search
    #[builder(default = "100")]
    pub rootfinding_max_iter: u32,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> Settings<T> for DefaultSettings<T>
where
    T: FloatT,
{
    //NB: CoreSettings is typedef'd to DefaultSettings
    fn core(&self) -> &DefaultSettings<T> {
        self
    }
    fn core_mut(&mut self) -> &mut DefaultSettings<T> {
        self
    }
}

impl<T> DefaultSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_step_fraction(self.max_step_fraction)?;
        validate_tolerances(&[
            ("tol_feas", self.tol_feas),
            ("tol_gap_abs", self.tol_gap_abs),
            ("tol_gap_rel", self.tol_gap_rel),
            ("rootfinding_tol", self.rootfinding_tol),
        ])?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check the fields that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_step_fraction) = self.max_step_fraction {
            validate_max_step_fraction(max_step_fraction)?;
        }

        let tolerances = [
            ("tol_feas", self.tol_feas),
            ("tol_gap_abs", self.tol_gap_abs),
            ("tol_gap_rel", self.tol_gap_rel),
            ("rootfinding_tol", self.rootfinding_tol),
        ];
        let explicit: Vec<_> = tolerances
            .iter()
            .filter_map(|&(name, v)| v.map(|v| (name, v)))
            .collect();
        validate_tolerances(&explicit)?;

        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_max_step_fraction<T: FloatT>(v: T) -> Result<(), SettingsError> {
    if v > T::zero() && v <= T::one() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("max_step_fraction"))
    }
}

fn validate_tolerances<T: FloatT>(tols: &[(&'static str, T)]) -> Result<(), SettingsError> {
    // tolerances must be nonnegative numbers
    for &(name, v) in tols {
        if !(v >= T::zero()) || v.is_infinite() {
            return Err(SettingsError::BadFieldValue(name));
        }
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = DefaultSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, DefaultSettings::default());
    assert_eq!(settings.max_iter, 100);
    assert_eq!(settings.tol_gap_abs, 1e-10);

    // step fraction must lie in (0,1]
    assert!(DefaultSettingsBuilder::<f64>::default()
        .max_step_fraction(1.0)
        .build()
        .is_ok());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .max_step_fraction(0.0)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .max_step_fraction(1.5)
        .build()
        .is_err());

    // tolerances must be nonnegative
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_feas(-1e-8)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_gap_rel(f64::NAN)
        .build()
        .is_err());

    // directly construct a bad DefaultSettings and manually check
    let settings = DefaultSettings::<f64> {
        max_step_fraction: f64::NAN,
        ..DefaultSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("max_step_fraction"))
    );
}
