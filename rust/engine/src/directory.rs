use crate::containers::ChainedMap;
use crate::errors::GameError;
use crate::player::Participant;

/// Name -> participant lookup for the session.
///
/// Populated once when the session starts; entries are not removed during play.
#[derive(Debug, Default)]
pub struct ParticipantDirectory {
    by_name: ChainedMap<String, Participant>,
}

impl ParticipantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `participant` under its name, replacing any previous entry.
    pub fn put(&mut self, participant: Participant) -> Result<Option<Participant>, GameError> {
        if participant.name().trim().is_empty() {
            return Err(GameError::InvalidArgument(
                "participant name must not be blank".to_string(),
            ));
        }
        Ok(self.by_name.put(participant.name().to_string(), participant))
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.by_name.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Participant> {
        self.by_name.get_mut(name)
    }

    /// Like [`get`](Self::get) but unknown names are an error.
    pub fn require(&self, name: &str) -> Result<&Participant, GameError> {
        self.get(name)
            .ok_or_else(|| GameError::UnknownParticipant(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut Participant, GameError> {
        self.get_mut(name)
            .ok_or_else(|| GameError::UnknownParticipant(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}
