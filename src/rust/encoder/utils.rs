pub(crate) fn one_hot(value: &str, categories: &[&str]) -> Vec<f32> {
    categories
        .iter()
        .map(|&category| if category == value { 1.0 } else { 0.0 })
        .collect()
}

pub(crate) fn multi_label(selected: &[impl AsRef<str>], categories: &[&str]) -> Vec<f32> {
    categories
        .iter()
        .map(|&category| {
            if selected.iter().any(|s| s.as_ref() == category) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

pub(crate) fn ordinal_lookup(value: &str, table: &[(&str, i64)]) -> Option<i64> {
    table
        .iter()
        .find(|(label, _)| *label == value)
        .map(|&(_, code)| code)
}
