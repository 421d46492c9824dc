use futures::FutureExt;

pub trait BoardStorage: Send + Sync {
    fn duplicate(&self) -> Box<dyn BoardStorage>;

    fn load<'f, 'own>(
        &'own self,
    ) -> futures::future::BoxFuture<'f, Result<common::ScoreBoard, String>>
    where
        'own: 'f;

    fn save<'f, 'own>(
        &'own self,
        board: common::ScoreBoard,
    ) -> futures::future::BoxFuture<'f, Result<(), String>>
    where
        'own: 'f;

    fn reset<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<(), String>>
    where
        'own: 'f;
}

pub struct JsonFileStorage {
    file: std::sync::Arc<std::path::PathBuf>,
}

impl JsonFileStorage {
    pub fn new<P>(file: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self {
            file: std::sync::Arc::new(file.into()),
        }
    }
}

impl BoardStorage for JsonFileStorage {
    fn duplicate(&self) -> Box<dyn BoardStorage> {
        Box::new(Self {
            file: self.file.clone(),
        })
    }

    fn load<'f, 'own>(
        &'own self,
    ) -> futures::future::BoxFuture<'f, Result<common::ScoreBoard, String>>
    where
        'own: 'f,
    {
        async move {
            // A board that was never saved starts out fresh.
            let raw = match tokio::fs::read(self.file.as_path()).await {
                Ok(raw) => raw,
                Err(_) => return Ok(common::ScoreBoard::new("Default Board")),
            };

            match serde_json::from_slice(&raw) {
                Ok(board) => Ok(board),
                Err(e) => {
                    tracing::warn!("Unparseable board file, starting fresh: {:?}", e);
                    Ok(common::ScoreBoard::new("Default Board"))
                }
            }
        }
        .boxed()
    }

    fn save<'f, 'own>(
        &'own self,
        board: common::ScoreBoard,
    ) -> futures::future::BoxFuture<'f, Result<(), String>>
    where
        'own: 'f,
    {
        async move {
            if let Some(data_dir) = self.file.parent() {
                if !tokio::fs::try_exists(data_dir).await.unwrap_or(false) {
                    tokio::fs::create_dir_all(data_dir)
                        .await
                        .map_err(|e| format!("Creating data directory: {:?}", e))?;
                }
            }

            let encoded = serde_json::to_string_pretty(&board)
                .map_err(|e| format!("Serializing board: {:?}", e))?;

            tokio::fs::write(self.file.as_path(), encoded)
                .await
                .map_err(|e| format!("Writing board file: {:?}", e))
        }
        .boxed()
    }

    fn reset<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<(), String>>
    where
        'own: 'f,
    {
        async move {
            match tokio::fs::remove_file(self.file.as_path()).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(format!("Removing board file: {:?}", e)),
            }
        }
        .boxed()
    }
}
