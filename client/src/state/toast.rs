//! Transient user notices ("toasts").
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push a [`Notice`] after a send or a status change; the toaster
//! component renders the list and dismisses entries after
//! [`DISMISS_AFTER_MS`]. The list is bounded so a burst of sends never
//! stacks more than [`MAX_TOASTS`] on screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Most toasts shown at once; the oldest is evicted first.
pub const MAX_TOASTS: usize = 3;

/// Auto-dismiss delay in the browser.
pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Destructive,
}

/// Fixed notice copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const STUDENT_SENT: Self = Self {
        kind: ToastKind::Default,
        title: "Mensagem enviada!",
        description: "Sua mensagem foi compartilhada com segurança.",
    };

    pub const VOLUNTEER_SENT: Self = Self {
        kind: ToastKind::Default,
        title: "Mensagem de apoio enviada!",
        description: "Sua mensagem foi compartilhada com carinho.",
    };

    pub const WENT_ONLINE: Self = Self {
        kind: ToastKind::Default,
        title: "Você entrou em serviço",
        description: "Agora você pode ajudar estudantes que precisam de apoio",
    };

    pub const WENT_OFFLINE: Self = Self {
        kind: ToastKind::Default,
        title: "Você saiu de serviço",
        description: "Não receberá mais notificações de mensagens",
    };

    pub const MUST_BE_ONLINE: Self = Self {
        kind: ToastKind::Destructive,
        title: "Você precisa estar online",
        description: "Ative seu status online para enviar mensagens de apoio",
    };

    pub const SEND_FAILED: Self = Self {
        kind: ToastKind::Destructive,
        title: "Não foi possível enviar",
        description: "O armazenamento do navegador não está disponível.",
    };

    /// Notice for a change of availability, given the new online flag.
    pub fn for_availability(online: bool) -> Self {
        if online { Self::WENT_ONLINE } else { Self::WENT_OFFLINE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Bounded list of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show `notice` and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
