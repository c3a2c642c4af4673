/// Checkbox state of the terms page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Agreement {
    pub terms: bool,
    pub privacy: bool,
}

impl Agreement {
    /// "Agree to all" is shown checked only when every item is.
    pub fn all(&self) -> bool {
        self.terms && self.privacy
    }

    pub fn set_all(&mut self, checked: bool) {
        self.terms = checked;
        self.privacy = checked;
    }

    pub fn can_continue(&self) -> bool {
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_follows_items() {
        let mut a = Agreement::default();
        assert!(!a.can_continue());
        a.terms = true;
        assert!(!a.all());
        a.privacy = true;
        assert!(a.all());
        a.privacy = false;
        assert!(!a.can_continue());
    }

    #[test]
    fn test_set_all() {
        let mut a = Agreement {
            terms: true,
            privacy: false,
        };
        a.set_all(true);
        assert_eq!(a, Agreement { terms: true, privacy: true });
        a.set_all(false);
        assert_eq!(a, Agreement::default());
    }
}
