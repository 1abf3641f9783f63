use crate::output::Output;

/// `CLS`
pub(super) fn run(out: &mut dyn Output) {
    out.clear();
}
