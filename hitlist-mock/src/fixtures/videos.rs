use hitlist_core::VideoRef;

const VIDEOS: &[(&str, &str)] = &[
    ("Golden", "yebNIHKAC4A"),
    ("The Fate Of Ophelia", "ko70cExuzZM"),
    ("Ordinary", "u2ah9tWTkmk"),
    ("Mutt", "zX2ACs2M5Hk"),
    ("Daisies", "j9v1pLr6L8A"),
    ("Manchild", "aSugSGCC12I"),
    ("Undocumented", "und0cum3nt"),
    ("TIMEOUT", "t1m30ut0000"),
    ("Love Me Not", "8Ebqe2Dbzls"),
];

/// Resolve a free-text query by the fixture title it starts with.
pub fn by_query(query: &str) -> Option<VideoRef> {
    VIDEOS
        .iter()
        .find(|(title, _)| query.starts_with(&format!("{title} ")))
        .map(|(title, id)| VideoRef {
            id: (*id).to_string(),
            title: format!("{title} (Official Music Video)"),
            thumbnail_url: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
        })
}
