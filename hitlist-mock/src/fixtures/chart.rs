use hitlist_core::ChartEntry;

const ROWS: &[(&str, &str, &str)] = &[
    ("1", "Golden", "HUNTR/X: EJAE, Audrey Nuna & REI AMI"),
    ("2", "The Fate Of Ophelia", "Taylor Swift"),
    ("3", "Ordinary", "Alex Warren"),
    ("4", "Mutt", "Leon Thomas"),
    ("5", "Daisies", "Justin Bieber"),
    ("6", "Soda Pop", "Saja Boys"),
    ("7", "FAIL", "Broken Records"),
    ("8", "Manchild", "Sabrina Carpenter"),
    ("9", "Undocumented", "Nobody Knows"),
    ("10", "TIMEOUT", "Slow Band"),
    ("11", "Love Me Not", "Ravyn Lenae"),
    ("12", "Just In Case", "Morgan Wallen"),
];

pub fn entries() -> Vec<ChartEntry> {
    ROWS.iter()
        .map(|(rank, title, artist)| ChartEntry::new(*rank, *title, *artist))
        .collect()
}
