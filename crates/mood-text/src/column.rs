/// Concatenate the non-missing cells of one column into raw text.
///
/// Missing cells are `None` and are skipped; the rest are joined with a
/// single space. Cells are expected to already be strings.
pub fn join_column<I, S>(values: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for value in values.into_iter().flatten() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(value.as_ref());
    }
    out
}
