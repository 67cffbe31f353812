/// Prefix marking a licence identifier as a reference to licence text
/// supplied by the document itself
const LICENCE_REF_PREFIX: &str = "licenseref-";

/// Returns whether the identifier is a Licence Reference (`LicenseRef-...`)
///
/// The comparison ignores ASCII case only; Unicode case folding (such as
/// `İ` lowering to `i`) does not apply. The part after the prefix is not
/// checked against the requirements of any SPDX version, and a `true` result
/// says nothing about whether the referenced text actually exists.
pub fn is_licence_ref(id: &str) -> bool {
    id.get(..LICENCE_REF_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LICENCE_REF_PREFIX))
}
