/// Fixed category vocabulary, in canonical order. Tag extraction and the
/// filter chips both draw from this list.
pub const CATEGORIES: &[&str] = &[
    "Adventure",
    "Afrofuturism",
    "Art & Photography",
    "Autobiography",
    "Biography",
    "Business & Economics",
    "Children’s Fiction",
    "Classic Fiction",
    "Comics",
    "Cookbooks / Food Writing",
    "Cultural Studies",
    "Cyberpunk",
    "Detective / Crime",
    "Drama / Literary Fiction",
    "Dystopian (YA or Adult)",
    "Education / Teaching",
    "Environmental Writing",
    "Essays & Journalism",
    "Espionage",
    "Fantasy",
    "Folklore & Mythology",
    "Graphic Novels",
    "Hard Science Fiction",
    "Health & Wellness",
    "Historical Fiction",
    "History",
    "Horror",
    "Humor / Satire",
    "LGBTQ+ Literature",
    "Legal Thriller",
    "Magical Realism",
    "Memoir",
    "Middle Grade Fiction",
    "Mystery",
    "Noir",
    "Paranormal Romance",
    "Philosophy",
    "Picture Books",
    "Politics & Current Affairs",
    "Psychological Thriller",
    "Religion & Spirituality",
    "Romance",
    "Science & Nature",
    "Science Fiction",
    "Self-Help / Personal Development",
    "Short Stories",
    "Space Opera",
    "Speculative Fiction",
    "Spirituality",
    "Steampunk",
    "Technology / Engineering",
    "Thriller & Suspense",
    "Travel",
    "True Crime",
    "Urban Fantasy",
    "Young Adult (YA)",
];

/// Case-insensitive lookup of the canonical spelling for a category name.
pub fn canonical(name: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .copied()
        .find(|entry| entry.eq_ignore_ascii_case(name))
}
