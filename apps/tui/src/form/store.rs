use std::collections::BTreeMap;

/// One in-progress or submitted record, field name to raw value.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SubmissionGroup {
    type_name: String,
    records: Vec<FormValues>,
}

/// Submitted records grouped by form type.
///
/// Groups are kept in the order their type was first submitted, which is the
/// order the result tables are shown in. A group stays in place after its
/// last record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStore {
    groups: Vec<SubmissionGroup>,
}

impl SubmissionStore {
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn records(&self, type_name: &str) -> &[FormValues] {
        self.group(type_name)
            .map_or(&[][..], |group| group.records.as_slice())
    }

    pub fn get(&self, type_name: &str, index: usize) -> Option<&FormValues> {
        self.records(type_name).get(index)
    }

    pub fn len(&self, type_name: &str) -> usize {
        self.records(type_name).len()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|group| group.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn push(&mut self, type_name: &str, values: FormValues) {
        if let Some(group) = self.group_mut(type_name) {
            group.records.push(values);
            return;
        }

        self.groups.push(SubmissionGroup {
            type_name: type_name.to_string(),
            records: vec![values],
        });
    }

    /// Replaces the record at `index`, returning false if there is none.
    pub fn replace(&mut self, type_name: &str, index: usize, values: FormValues) -> bool {
        match self
            .group_mut(type_name)
            .and_then(|group| group.records.get_mut(index))
        {
            Some(slot) => {
                *slot = values;
                true
            }
            None => false,
        }
    }

    /// Removes the record at `index`; later records shift down by one.
    pub fn remove(&mut self, type_name: &str, index: usize) -> Option<FormValues> {
        let group = self.group_mut(type_name)?;
        if index < group.records.len() {
            Some(group.records.remove(index))
        } else {
            None
        }
    }

    /// Non-empty groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[FormValues])> {
        self.groups
            .iter()
            .filter(|group| !group.records.is_empty())
            .map(|group| (group.type_name.as_str(), group.records.as_slice()))
    }

    /// Every stored record as `(type_name, index)`, in display order.
    pub fn rows(&self) -> Vec<(String, usize)> {
        self.groups()
            .flat_map(|(type_name, records)| {
                (0..records.len()).map(move |index| (type_name.to_string(), index))
            })
            .collect()
    }

    fn group(&self, type_name: &str) -> Option<&SubmissionGroup> {
        self.groups
            .iter()
            .find(|group| group.type_name == type_name)
    }

    fn group_mut(&mut self, type_name: &str) -> Option<&mut SubmissionGroup> {
        self.groups
            .iter_mut()
            .find(|group| group.type_name == type_name)
    }
}
