use std::collections::HashMap;

use crate::device::Driver;

/// A named binder that pushes one value to the driver.
pub trait Setter<D: Driver> {
    type Value;

    fn apply(&self, gl: &D, value: &Self::Value);
}

/// Applies every value in `values` that has a setter in `setters`.
///
/// Names without a setter are skipped: the program does not declare that
/// variable (often because the compiler eliminated it).
pub fn apply_setters<'v, D, S, K>(
    gl: &D,
    setters: &HashMap<String, S>,
    values: impl IntoIterator<Item = (&'v K, &'v S::Value)>,
) where
    D: Driver,
    S: Setter<D>,
    S::Value: 'v,
    K: AsRef<str> + ?Sized + 'v,
{
    for (name, value) in values {
        match setters.get(name.as_ref()) {
            Some(setter) => setter.apply(gl, value),
            None => log::trace!("no active variable `{}`; value ignored", name.as_ref()),
        }
    }
}
