/// Maps a catalog genre id to the seed genre understood by the
/// recommendations endpoint. Ids without a mapping are used as they are.
pub fn seed_genre_for(genre_id: &str) -> &str {
    match genre_id {
        "classic-rock" => "rock",
        "alternative" => "alt-rock",
        "bebop" => "jazz",
        "indie-rock" => "indie",
        "bachata" => "latin",
        other => other,
    }
}
