// ============================================================================
// REACTIVITY - Store con reducer + sistema de subscribers
// ============================================================================
// El estado SOLO cambia aplicando eventos con `dispatch`; cada aplicación es
// atómica (un solo hilo). Después se notifica a los subscribers (las vistas).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Un estado que sabe aplicarse sus propios eventos
pub trait Reducer {
    type Event;

    fn reduce(&mut self, event: Self::Event);
}

/// Fases de una operación asíncrona
#[derive(Clone, PartialEq, Debug)]
pub enum LifecycleEvent<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

type Callback = Rc<dyn Fn()>;

pub type SubscriptionId = usize;

/// Estado reactivo con reducer y notificaciones.
/// Los clones comparten estado y subscribers.
pub struct Store<S> {
    value: Rc<RefCell<S>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback)>>>,
    next_id: Rc<Cell<SubscriptionId>>,
}

impl<S: Reducer> Store<S> {
    pub fn new(value: S) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Aplicar un evento y notificar
    pub fn dispatch(&self, event: S::Event) {
        self.value.borrow_mut().reduce(event);
        self.notify();
    }

    /// Leer el estado sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&S) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista antes para que un callback pueda (des)suscribirse.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<S: Reducer + Clone> Store<S> {
    pub fn snapshot(&self) -> S {
        self.value.borrow().clone()
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Dos handles son iguales si apuntan al mismo store (para props/context de Yew)
impl<S> PartialEq for Store<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}
