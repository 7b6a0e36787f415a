use super::{
    common::{General, QueryCommon, QueryField, Search},
    Query,
};

/// Filters for the popular videos feed. Durations are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularVideoParams {
    pub min_width: u32,
    pub min_height: u32,
    pub min_duration: u32,
    pub max_duration: u32,
    pub common: QueryCommon,
}

impl Query for PopularVideoParams {
    fn fields(&self) -> Vec<QueryField> {
        let mut fields = vec![
            QueryField::new("min_width", &self.min_width),
            QueryField::new("min_height", &self.min_height),
            QueryField::new("min_duration", &self.min_duration),
            QueryField::new("max_duration", &self.max_duration),
        ];
        fields.extend(self.common.fields());
        fields
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl PopularVideoParams {
    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_min_duration(mut self, seconds: u32) -> Self {
        self.min_duration = seconds;
        self
    }

    pub fn with_max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = seconds;
        self
    }
}

/// Video search. `query` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSearchParams {
    pub query: String,
    pub general: General,
    pub common: QueryCommon,
}

impl Query for VideoSearchParams {
    fn fields(&self) -> Vec<QueryField> {
        let mut fields = vec![QueryField::new("query", &self.query)];
        fields.extend(self.general.fields());
        fields.extend(self.common.fields());
        fields
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Search for VideoSearchParams {
    fn get_general(&mut self) -> &mut General {
        &mut self.general
    }
}

impl VideoSearchParams {
    pub fn new(query: &str) -> Self {
        Self::default().with_query(query)
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }
}
