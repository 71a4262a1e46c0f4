//! Helpers for running configuration tests inside a `figment::Jail`.
//!
//! A jail gives each test a scratch working directory and an isolated
//! environment, so render options can be loaded from files and
//! `COMPONENT_DOCS_` variables without leaking into other tests.

use anyhow::{Result, anyhow};
use figment::Jail;

/// Runs `f` inside a fresh [`Jail`] and hands back its output.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("jailed test failed: {err}"))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Runs `f` in a jail whose environment holds `vars`.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or `f` fails.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<T>,
{
    with_jail(|jail| {
        for (name, value) in vars {
            jail.set_env(name, value);
        }
        f(jail)
    })
}

/// Turns a loader error into a [`figment::Error`] so it can leave the jail
/// closure through `?` or `map_err`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adaptor, which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
