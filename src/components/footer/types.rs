pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    // Disabled items stay visible but dimmed
    pub enabled: bool,
}

impl FooterItem {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            enabled: true,
        }
    }

    pub const fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}
