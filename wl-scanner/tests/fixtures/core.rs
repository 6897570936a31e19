//! Client bindings for the `wayland` protocol
//!
//! Generated by wl-scanner.
//! From: core.xml
//!
//! @generated
#![allow(missing_docs)]
#![allow(unused_imports)]
#![allow(clippy::too_many_arguments)]
use std::os::fd::RawFd;
use std::sync::{Arc, PoisonError, RwLock};
use crate::client::{Argument, BaseProxy, Context, Error, Event, Handler, Proxy};
pub struct Display {
    base: BaseProxy,
}
impl Display {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_display";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 1u32;
    /// Create a new `Display` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self { base: BaseProxy::new(ctx) });
        ctx.register(ret.clone());
        ret
    }
    pub const SYNC_OPCODE: u16 = 0;
    pub fn sync(&self) -> Result<Arc<Callback>, Error> {
        let callback = Callback::new(self.context());
        self.context()
            .send_request(self, Self::SYNC_OPCODE, &[Argument::NewId(callback.id())])?;
        Ok(callback)
    }
    pub const GET_REGISTRY_OPCODE: u16 = 1;
    pub fn get_registry(&self) -> Result<Arc<Registry>, Error> {
        let registry = Registry::new(self.context());
        self.context()
            .send_request(
                self,
                Self::GET_REGISTRY_OPCODE,
                &[Argument::NewId(registry.id())],
            )?;
        Ok(registry)
    }
}
impl Proxy for Display {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
}
pub struct Registry {
    base: BaseProxy,
    handlers: RwLock<RegistryHandlers>,
}
#[derive(Default)]
struct RegistryHandlers {
    global: Vec<Arc<dyn Handler<RegistryGlobalEvent>>>,
    global_remove: Vec<Arc<dyn Handler<RegistryGlobalRemoveEvent>>>,
}
impl Registry {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_registry";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 1u32;
    /// Create a new `Registry` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self {
            base: BaseProxy::new(ctx),
            handlers: RwLock::default(),
        });
        ctx.register(ret.clone());
        ret
    }
    pub const BIND_OPCODE: u16 = 0;
    pub fn bind(
        &self,
        name: u32,
        interface: &str,
        version: u32,
        id: &dyn Proxy,
    ) -> Result<(), Error> {
        self.context()
            .send_request(
                self,
                Self::BIND_OPCODE,
                &[
                    Argument::Uint(name),
                    Argument::String(Some(interface.to_string())),
                    Argument::Uint(version),
                    Argument::NewId(id.id()),
                ],
            )
    }
}
/// `global` event of [`Registry`]
#[derive(Clone)]
pub struct RegistryGlobalEvent {
    pub name: u32,
    pub interface: String,
    pub version: u32,
}
/// `global_remove` event of [`Registry`]
#[derive(Clone)]
pub struct RegistryGlobalRemoveEvent {
    pub name: u32,
}
impl Registry {
    /// Register a handler for [`RegistryGlobalEvent`]
    pub fn add_global_handler(&self, handler: Arc<dyn Handler<RegistryGlobalEvent>>) {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner).global.push(handler);
    }
    /// Remove the first registration of `handler` for [`RegistryGlobalEvent`], if any
    pub fn remove_global_handler(&self, handler: &Arc<dyn Handler<RegistryGlobalEvent>>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = handlers
            .global
            .iter()
            .position(|h| Arc::ptr_eq(h, handler))
        {
            handlers.global.remove(index);
        }
    }
    /// Register a handler for [`RegistryGlobalRemoveEvent`]
    pub fn add_global_remove_handler(
        &self,
        handler: Arc<dyn Handler<RegistryGlobalRemoveEvent>>,
    ) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .global_remove
            .push(handler);
    }
    /// Remove the first registration of `handler` for [`RegistryGlobalRemoveEvent`], if any
    pub fn remove_global_remove_handler(
        &self,
        handler: &Arc<dyn Handler<RegistryGlobalRemoveEvent>>,
    ) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = handlers
            .global_remove
            .iter()
            .position(|h| Arc::ptr_eq(h, handler))
        {
            handlers.global_remove.remove(index);
        }
    }
}
impl Proxy for Registry {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
    fn dispatch(&self, event: &mut Event) {
        match event.opcode() {
            0 => {
                let handlers = self
                    .handlers
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .global
                    .clone();
                if !handlers.is_empty() {
                    let ev = RegistryGlobalEvent {
                        name: event.uint32(),
                        interface: event.string(),
                        version: event.uint32(),
                    };
                    for handler in &handlers {
                        handler.handle(&ev);
                    }
                }
            }
            1 => {
                let handlers = self
                    .handlers
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .global_remove
                    .clone();
                if !handlers.is_empty() {
                    let ev = RegistryGlobalRemoveEvent {
                        name: event.uint32(),
                    };
                    for handler in &handlers {
                        handler.handle(&ev);
                    }
                }
            }
            _ => {}
        }
    }
}
pub struct Callback {
    base: BaseProxy,
    handlers: RwLock<CallbackHandlers>,
}
#[derive(Default)]
struct CallbackHandlers {
    done: Vec<Arc<dyn Handler<CallbackDoneEvent>>>,
}
impl Callback {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_callback";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 1u32;
    /// Create a new `Callback` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self {
            base: BaseProxy::new(ctx),
            handlers: RwLock::default(),
        });
        ctx.register(ret.clone());
        ret
    }
}
/// `done` event of [`Callback`]
#[derive(Clone)]
pub struct CallbackDoneEvent {
    pub callback_data: u32,
}
impl Callback {
    /// Register a handler for [`CallbackDoneEvent`]
    pub fn add_done_handler(&self, handler: Arc<dyn Handler<CallbackDoneEvent>>) {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner).done.push(handler);
    }
    /// Remove the first registration of `handler` for [`CallbackDoneEvent`], if any
    pub fn remove_done_handler(&self, handler: &Arc<dyn Handler<CallbackDoneEvent>>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = handlers.done.iter().position(|h| Arc::ptr_eq(h, handler)) {
            handlers.done.remove(index);
        }
    }
}
impl Proxy for Callback {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
    fn dispatch(&self, event: &mut Event) {
        match event.opcode() {
            0 => {
                let handlers = self
                    .handlers
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .done
                    .clone();
                if !handlers.is_empty() {
                    let ev = CallbackDoneEvent {
                        callback_data: event.uint32(),
                    };
                    for handler in &handlers {
                        handler.handle(&ev);
                    }
                }
            }
            _ => {}
        }
    }
}
pub struct Surface {
    base: BaseProxy,
    handlers: RwLock<SurfaceHandlers>,
}
#[derive(Default)]
struct SurfaceHandlers {
    enter: Vec<Arc<dyn Handler<SurfaceEnterEvent>>>,
}
impl Surface {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_surface";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 4u32;
    /// Create a new `Surface` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self {
            base: BaseProxy::new(ctx),
            handlers: RwLock::default(),
        });
        ctx.register(ret.clone());
        ret
    }
    pub const DESTROY_OPCODE: u16 = 0;
    /// This request is a destructor: the object must not be used afterwards.
    pub fn destroy(&self) -> Result<(), Error> {
        self.context().send_request(self, Self::DESTROY_OPCODE, &[])
    }
    pub const ATTACH_OPCODE: u16 = 1;
    pub fn attach(&self, buffer: Option<&Buffer>, x: i32, y: i32) -> Result<(), Error> {
        self.context()
            .send_request(
                self,
                Self::ATTACH_OPCODE,
                &[
                    Argument::Object(buffer.map(|p| p.id())),
                    Argument::Int(x),
                    Argument::Int(y),
                ],
            )
    }
    pub const SET_BUFFER_TRANSFORM_OPCODE: u16 = 2;
    /// Available since version 2.
    pub fn set_buffer_transform(&self, transform: OutputTransform) -> Result<(), Error> {
        self.context()
            .send_request(
                self,
                Self::SET_BUFFER_TRANSFORM_OPCODE,
                &[Argument::Int(transform as i32)],
            )
    }
}
/// `enter` event of [`Surface`]
#[derive(Clone)]
pub struct SurfaceEnterEvent {
    pub output: Option<Arc<Output>>,
}
impl Surface {
    /// Register a handler for [`SurfaceEnterEvent`]
    pub fn add_enter_handler(&self, handler: Arc<dyn Handler<SurfaceEnterEvent>>) {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner).enter.push(handler);
    }
    /// Remove the first registration of `handler` for [`SurfaceEnterEvent`], if any
    pub fn remove_enter_handler(&self, handler: &Arc<dyn Handler<SurfaceEnterEvent>>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = handlers.enter.iter().position(|h| Arc::ptr_eq(h, handler)) {
            handlers.enter.remove(index);
        }
    }
}
impl Proxy for Surface {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
    fn dispatch(&self, event: &mut Event) {
        match event.opcode() {
            0 => {
                let handlers = self
                    .handlers
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .enter
                    .clone();
                if !handlers.is_empty() {
                    let ev = SurfaceEnterEvent {
                        output: event.proxy::<Output>(self.context()),
                    };
                    for handler in &handlers {
                        handler.handle(&ev);
                    }
                }
            }
            _ => {}
        }
    }
}
pub struct Buffer {
    base: BaseProxy,
}
impl Buffer {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_buffer";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 1u32;
    /// Create a new `Buffer` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self { base: BaseProxy::new(ctx) });
        ctx.register(ret.clone());
        ret
    }
}
impl Proxy for Buffer {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
}
pub struct Output {
    base: BaseProxy,
}
impl Output {
    /// Interface name on the wire
    pub const INTERFACE: &'static str = "wl_output";
    /// Interface version these bindings were generated from
    pub const VERSION: u32 = 3u32;
    /// Create a new `Output` and register it with `ctx`
    pub fn new(ctx: &Context) -> Arc<Self> {
        let ret = Arc::new(Self { base: BaseProxy::new(ctx) });
        ctx.register(ret.clone());
        ret
    }
}
impl Proxy for Output {
    fn base(&self) -> &BaseProxy {
        &self.base
    }
}
pub type OutputTransform = u32;
pub const OUTPUT_TRANSFORM_NORMAL: OutputTransform = 0;
pub const OUTPUT_TRANSFORM_90: OutputTransform = 1;
pub const OUTPUT_TRANSFORM_FLIPPED_90: OutputTransform = 5;
