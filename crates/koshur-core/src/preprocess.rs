use unicode_normalization::UnicodeNormalization;

/// A single text-to-text stage of a normalization pipeline
pub trait Preprocessor: Send + Sync {
    /// Short stage name used in logs
    fn name(&self) -> &str;

    fn process(&self, text: &str) -> String;
}

/// Composes decomposed sequences (NFC), e.g. alef + combining madda into `آ`
pub struct UnicodeComposition;

impl Preprocessor for UnicodeComposition {
    fn name(&self) -> &str {
        "nfc"
    }

    fn process(&self, text: &str) -> String {
        text.nfc().collect()
    }
}

/// Ordered list of stages, each fed the previous stage's output
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Preprocessor>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn push(&mut self, stage: impl Preprocessor + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn with_stage(mut self, stage: impl Preprocessor + 'static) -> Self {
        self.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn run(&self, text: &str) -> String {
        let mut text = text.to_string();

        for stage in &self.stages {
            let before = text.len();
            text = stage.process(&text);
            tracing::trace!(stage = stage.name(), before, after = text.len(), "stage done");
        }

        text
    }
}

impl Preprocessor for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn process(&self, text: &str) -> String {
        self.run(text)
    }
}
