//! Member plans: which members a type transfers, and how.
//!
//! A plan is the disjoint partition of a struct's members into the
//! deep-cloned set and the shallow (opted-out) set. Plans are enumerated
//! by [`Structure::members`] — usually generated by `#[derive(Reflect)]` —
//! and folded into a cached procedure by the strategy compiler, so the
//! enumeration runs once per type for the life of the process.

use std::fmt;

use smallvec::SmallVec;

use crate::{Reflect, Visited};

/// Copy policy of a single member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPolicy {
    /// Recursively cloned through the engine.
    Deep,
    /// Transferred with a plain `Clone`; handles stay shared.
    Shallow,
}

/// Transfer thunk moving one member from the original into the clone.
type TransferFn<T> = fn(&T, &mut T, &mut Visited);

/// One copyable member of a planned type: a name, a policy, and the
/// monomorphized thunk that performs the transfer.
pub struct Member<T> {
    name: &'static str,
    policy: CopyPolicy,
    transfer: TransferFn<T>,
}

impl<T> Member<T> {
    /// Member that is recursively deep-cloned.
    pub fn deep(name: &'static str, transfer: TransferFn<T>) -> Self {
        Member {
            name,
            policy: CopyPolicy::Deep,
            transfer,
        }
    }

    /// Member that opted out of deep cloning.
    pub fn shallow(name: &'static str, transfer: TransferFn<T>) -> Self {
        Member {
            name,
            policy: CopyPolicy::Shallow,
            transfer,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> CopyPolicy {
        self.policy
    }

    /// Run the member's transfer from `original` into `clone`.
    pub fn transfer(&self, original: &T, clone: &mut T, visited: &mut Visited) {
        (self.transfer)(original, clone, visited);
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// The disjoint deep/shallow partition of a type's members.
///
/// A member can only ever be in one set: the opt-out marker moves it from
/// deep to shallow at enumeration time, so no membership check is needed
/// at transfer time.
pub struct MemberPlan<T> {
    shallow: SmallVec<[Member<T>; 2]>,
    deep: SmallVec<[Member<T>; 8]>,
}

impl<T> MemberPlan<T> {
    /// Partition an enumeration into the shallow and deep sets.
    pub fn new(members: Vec<Member<T>>) -> Self {
        let mut plan = MemberPlan {
            shallow: SmallVec::new(),
            deep: SmallVec::new(),
        };
        for member in members {
            match member.policy {
                CopyPolicy::Shallow => plan.shallow.push(member),
                CopyPolicy::Deep => plan.deep.push(member),
            }
        }
        plan
    }

    pub fn deep(&self) -> &[Member<T>] {
        &self.deep
    }

    pub fn shallow(&self) -> &[Member<T>] {
        &self.shallow
    }

    /// Total number of planned members.
    pub fn len(&self) -> usize {
        self.deep.len() + self.shallow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deep.is_empty() && self.shallow.is_empty()
    }

    /// Transfer every member from `original` into `clone`.
    ///
    /// The sets are disjoint so relative order is immaterial; the shallow
    /// set runs first, mirroring the plan layout.
    pub fn apply(&self, original: &T, clone: &mut T, visited: &mut Visited) {
        for member in &self.shallow {
            member.transfer(original, clone, visited);
        }
        for member in &self.deep {
            member.transfer(original, clone, visited);
        }
    }
}

impl<T> fmt::Debug for MemberPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberPlan")
            .field("shallow", &self.shallow)
            .field("deep", &self.deep)
            .finish()
    }
}

/// A type whose members the engine plans over.
///
/// Implemented by `#[derive(Reflect)]`, or by hand for types the derive
/// cannot express. Clones are built by overwriting every planned member of
/// a `Default` instance — the default payload is what a cycle observes if
/// it reaches its own clone before population finishes, and it is fully
/// overwritten before the clone escapes the call.
pub trait Structure: Reflect + Default {
    /// Enumerate the copyable members of this type.
    fn members() -> Vec<Member<Self>>;
}
