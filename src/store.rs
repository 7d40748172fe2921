#[cfg(feature = "ssr")]
mod store_impl {
    use crate::config::AppConfig;
    use crate::error::StoreError;
    use crate::models::review::{
        Review, ReviewView, COLUMNS, COLUMN_FEEDBACK, COLUMN_NAME, COLUMN_PRODUCT,
        COLUMN_SATISFACTION,
    };
    use leptos::logging::{error, log, warn};
    use std::fs::File;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Store shared between actix workers and server functions.
    pub type SharedStore = Arc<Mutex<ReviewStore>>;

    /// In-memory review list kept in step with its CSV file.
    ///
    /// The list is read once in [`ReviewStore::open`]; each [`ReviewStore::append`]
    /// rewrites the whole file before returning. Nothing is written on drop.
    #[derive(Debug)]
    pub struct ReviewStore {
        path: PathBuf,
        reviews: Vec<Review>,
    }

    impl ReviewStore {
        // Open the store at the configured path, loading any existing reviews
        pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
            let path = config.reviews_file.clone();
            let reviews = load(&path)?;
            log!("[STORE] Opened {} with {} reviews", path.display(), reviews.len());
            Ok(ReviewStore { path, reviews })
        }

        pub fn into_shared(self) -> SharedStore {
            Arc::new(Mutex::new(self))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn reviews(&self) -> &[Review] {
            &self.reviews
        }

        pub fn len(&self) -> usize {
            self.reviews.len()
        }

        pub fn is_empty(&self) -> bool {
            self.reviews.is_empty()
        }

        /// Add a review to the end of the list and rewrite the backing file.
        ///
        /// If persisting fails the review stays in memory and the file lags
        /// behind until the next successful append.
        pub fn append(&mut self, review: Review) -> Result<(), StoreError> {
            self.reviews.push(review);
            persist(&self.path, &self.reviews).map_err(|e| {
                error!("[STORE] Failed to persist {} reviews: {}", self.reviews.len(), e);
                e
            })?;
            log!("[STORE] Persisted {} reviews to {}", self.reviews.len(), self.path.display());
            Ok(())
        }

        /// Reviews in insertion order, with display placeholders applied.
        pub fn render_view(&self) -> impl Iterator<Item = ReviewView<'_>> + '_ {
            self.reviews.iter().map(Review::view)
        }
    }

    // Position of each known column in the file's header, if present
    struct ColumnMap {
        name: Option<usize>,
        product: Option<usize>,
        satisfaction: Option<usize>,
        feedback: Option<usize>,
    }

    impl ColumnMap {
        fn from_headers(headers: &csv::StringRecord) -> Self {
            let find = |column: &str| headers.iter().position(|h| h == column);
            ColumnMap {
                name: find(COLUMN_NAME),
                product: find(COLUMN_PRODUCT),
                satisfaction: find(COLUMN_SATISFACTION),
                feedback: find(COLUMN_FEEDBACK),
            }
        }

        fn missing(&self) -> Vec<&'static str> {
            [self.name, self.product, self.satisfaction, self.feedback]
                .iter()
                .zip(COLUMNS)
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, column)| column)
                .collect()
        }
    }

    /// Read every review from `path`.
    ///
    /// A missing file is an empty store. Columns absent from the header, and
    /// cells absent from short rows, come back as `None`.
    pub fn load(path: &Path) -> Result<Vec<Review>, StoreError> {
        if !path.exists() {
            log!("[STORE] No review file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let columns = ColumnMap::from_headers(reader.headers()?);
        let missing = columns.missing();
        if !missing.is_empty() {
            warn!("[STORE] {} lacks columns {:?}, backfilling with nulls", path.display(), missing);
        }

        let mut reviews = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |column: Option<usize>| column.and_then(|i| record.get(i));
            // Header is row 1
            let row = idx + 2;

            reviews.push(Review {
                name: cell(columns.name).map(str::to_string),
                product: cell(columns.product).map(str::to_string),
                satisfaction: match cell(columns.satisfaction) {
                    Some(value) => parse_satisfaction(value, row)?,
                    None => None,
                },
                feedback: cell(columns.feedback).map(str::to_string),
            });
        }

        log!("[STORE] Loaded {} reviews from {}", reviews.len(), path.display());
        Ok(reviews)
    }

    // Empty cells are nulls; "4.0" is accepted because dataframe writers
    // emit integer columns holding nulls as floats.
    fn parse_satisfaction(value: &str, row: usize) -> Result<Option<u8>, StoreError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if let Ok(score) = value.parse::<u8>() {
            return Ok(Some(score));
        }
        match value.parse::<f64>() {
            Ok(score) if score.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&score) => {
                Ok(Some(score as u8))
            }
            _ => Err(StoreError::InvalidSatisfaction {
                row,
                value: value.to_string(),
            }),
        }
    }

    // `reviews.csv` -> `reviews.csv.tmp`
    fn tmp_path_for(path: &Path) -> PathBuf {
        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    /// Overwrite `path` with the header and one row per review.
    ///
    /// Rows go to a sibling temporary file which is then renamed over `path`.
    pub fn persist(path: &Path, reviews: &[Review]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = tmp_path_for(path);
        let mut writer = csv::Writer::from_path(&tmp_path)?;
        writer.write_record(COLUMNS)?;
        for review in reviews {
            let satisfaction = review.satisfaction.map(|s| s.to_string()).unwrap_or_default();
            writer.write_record([
                review.name.as_deref().unwrap_or_default(),
                review.product.as_deref().unwrap_or_default(),
                satisfaction.as_str(),
                review.feedback.as_deref().unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
        drop(writer);

        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }

}

#[cfg(feature = "ssr")]
pub use store_impl::{load, persist, ReviewStore, SharedStore};
