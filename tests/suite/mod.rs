mod contact;
mod site;
mod theme;
mod typewriter;
