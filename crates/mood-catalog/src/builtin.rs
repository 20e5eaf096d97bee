/// Dish suggestions shipped with the binary, in lookup-hint order.
pub(crate) const BUILTIN_MOODS: &[(&str, &[&str])] = &[
    ("happy", &["ice cream", "samosa", "pav bhaji"]),
    ("sad", &["chocolate", "dal khichdi", "comfort curry"]),
    ("lazy", &["instant noodles", "sandwich", "ready-to-eat biryani"]),
    ("energetic", &["fruit salad", "protein bowl", "green smoothie"]),
    ("romantic", &["paneer tikka", "wine risotto", "gulab jamun"]),
];
