use super::Applier;

pub(super) fn default_value<T>(applier: &Applier<T>) -> &T {
    &applier.config.default_value
}

pub(super) fn set_default_value<T>(applier: &mut Applier<T>, value: T) {
    applier.config.default_value = value;
}
