use super::Playlist;
use std::collections::HashMap;

/// All playlists, keyed by their lowercased name
#[derive(Debug, Clone, Default)]
pub struct PlaylistLibrary {
    playlists: HashMap<String, Playlist>,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a playlist, ignoring case
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&fold(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&fold(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&fold(name))
    }

    /// Insert a new empty playlist under `name`.
    ///
    /// Callers check `contains` first; an existing playlist with the same
    /// folded name is replaced.
    pub fn create(&mut self, name: &str) {
        self.playlists.insert(fold(name), Playlist::new(name.to_string()));
    }

    /// Remove a playlist, returning it if it existed
    pub fn remove(&mut self, name: &str) -> Option<Playlist> {
        self.playlists.remove(&fold(name))
    }

    /// Playlists ordered by their folded name
    pub fn sorted(&self) -> Vec<&Playlist> {
        let mut entries: Vec<(&String, &Playlist)> = self.playlists.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, playlist)| playlist).collect()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let mut lib = PlaylistLibrary::new();
        lib.create("My_Playlist");

        assert!(lib.contains("my_playlist"));
        assert!(lib.contains("MY_PLAYLIST"));
        assert_eq!(lib.get("my_PLAYLIST").unwrap().name, "My_Playlist");
    }

    #[test]
    fn test_remove() {
        let mut lib = PlaylistLibrary::new();
        lib.create("Chill");

        assert!(lib.remove("CHILL").is_some());
        assert!(lib.remove("chill").is_none());
        assert!(lib.is_empty());
    }

    #[test]
    fn test_sorted_by_folded_name() {
        let mut lib = PlaylistLibrary::new();
        lib.create("beta");
        lib.create("Gamma");
        lib.create("Alpha");
        assert_eq!(lib.len(), 3);

        let names: Vec<&str> = lib.sorted().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "Gamma"]);
    }
}
