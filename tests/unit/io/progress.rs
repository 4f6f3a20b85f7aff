//! Tests for row progress display

#[cfg(test)]
mod tests {
    use invaderwall::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a fresh bar finishes at zero rows
    // Verified by starting the bar at its length
    #[test]
    fn test_progress_starts_empty() {
        let pm = ProgressManager::new(8, Path::new("wall.png"));
        assert_eq!(pm.finish(), 0);
    }

    // Tests updates set the absolute row count
    // Verified by incrementing instead of setting the position
    #[test]
    fn test_progress_update() {
        let pm = ProgressManager::new(3, Path::new("out/wall.png"));
        pm.update(1);
        pm.update(2);
        assert_eq!(pm.finish(), 2);
    }

    // Tests a zero-row wallpaper is handled
    // Verified by panicking on empty bars
    #[test]
    fn test_progress_empty() {
        let pm = ProgressManager::new(0, Path::new(""));
        pm.update(0);
        assert_eq!(pm.finish(), 0);
    }
}
