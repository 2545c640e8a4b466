//! The control-flow worklist engine

use crate::analysis::{Effect, Listing, Reference};
use crate::arch::sm83;
use crate::cart::Cartridge;
use crate::memory::{BankedMemory, LinkerAddress};
use std::collections::HashSet;

/// Drives a worklist of discovered entry points over a cartridge, decoding
/// straight-line blocks and accumulating the labeled listing.
///
/// One tracer owns everything mutable about a run: the banked memory
/// window, the work queue, the labeled set, the output fragments, and the
/// single piece of simulated register state (the last immediate loaded
/// into the accumulator, which resets at every block start). Nothing is
/// shared across runs, so two traces can never alias each other's bank
/// state.
pub struct Tracer<'a> {
    mem: BankedMemory<'a>,
    hook: Option<u16>,
    queue: Vec<LinkerAddress>,
    queued: HashSet<LinkerAddress>,
    labeled: HashSet<LinkerAddress>,
    listing: Listing,
    accum: Option<u8>,
}

impl<'a> Tracer<'a> {
    pub fn new(cart: &'a Cartridge) -> Self {
        Tracer {
            mem: BankedMemory::new(cart),
            hook: None,
            queue: Vec::new(),
            queued: HashSet::new(),
            labeled: HashSet::new(),
            listing: Listing::new(),
            accum: None,
        }
    }

    /// Page the switchable window before the trace starts.
    pub fn set_initial_bank(&mut self, bank: u16) {
        if bank > 0 {
            self.mem.page(bank);
        } else {
            self.mem.set_bank(0);
        }
    }

    /// Register the address of the game's bank-switch routine. An
    /// unconditional `call` or `jp` to this address repages the window to
    /// the last immediate loaded into the accumulator.
    pub fn set_bank_switch_hook(&mut self, addr: u16) {
        self.hook = Some(addr);
    }

    /// Discard all state from a previous run so the next one starts clean.
    pub fn reset_output(&mut self) {
        self.listing.clear();
        self.queue.clear();
        self.queued.clear();
        self.labeled.clear();
        self.accum = None;
    }

    /// Trace every block reachable from `start` and return the finished
    /// listing.
    pub fn run(&mut self, start: u16) -> &Listing {
        let entry = LinkerAddress::new(self.mem.bank(), start);
        self.enqueue(entry);

        // The entry block runs under the configured bank even when it
        // starts in the fixed region.
        self.trace_block(start);

        let mut next = 0;

        while next < self.queue.len() {
            let item = self.queue[next];
            next += 1;

            if self.labeled.contains(&item) {
                continue;
            }

            // Targets above the ROM window are labeled with a warning
            // comment at the reference site; there is nothing there to
            // decode.
            if !item.is_rom() {
                continue;
            }

            self.switch_to(item);
            self.trace_block(item.addr());
        }

        &self.listing
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    fn enqueue(&mut self, target: LinkerAddress) {
        if self.queued.insert(target) {
            self.queue.push(target);
        }
    }

    /// Restore bank state for a dequeued work item. Fixed-region items
    /// record bank 0 without touching the switchable window, matching the
    /// hardware (and the quirk that targets discovered from fixed-region
    /// code carry bank 0).
    fn switch_to(&mut self, item: LinkerAddress) {
        if item.addr() < 0x4000 {
            self.mem.set_bank(u16::from(item.bank()));
        } else if self.mem.bank() != item.bank() {
            self.mem.page(u16::from(item.bank()));
        }
    }

    /// Decode one straight-line block starting at `start` under the
    /// current bank, stopping at the first `ret`/`reti` or undecodable
    /// byte.
    fn trace_block(&mut self, start: u16) {
        let start_at = LinkerAddress::new(self.mem.bank(), start);
        self.labeled.insert(start_at);
        self.accum = None;

        let mut loc = start;

        // Bounded by the address space so a return-less image still
        // terminates.
        for _ in 0..0x10000 {
            let at = LinkerAddress::new(self.mem.bank(), loc);
            let mut output = String::new();

            if loc == start {
                output.push_str(&format!("\n\rLabel{:X}: ;{}\n", at.rom_linear(), at));
            } else if self.queued.contains(&at) && !self.labeled.contains(&at) {
                // This address was discovered as a branch target before we
                // walked onto it; label it in place.
                output.push_str(&format!("Label{:X}: ;{}\n", at.rom_linear(), at));
                self.labeled.insert(at);
            }

            let disasm = sm83::decode(&self.mem, loc);

            for &reference in disasm.references() {
                self.note_reference(reference);
            }

            match disasm.effect() {
                Effect::LoadAccum(value) => self.accum = Some(value),
                Effect::StoreAbs(dest) if (0x2000..=0x2FFF).contains(&dest) => {
                    if let Some(bank) = self.accum {
                        self.mem.page(u16::from(bank));
                    }
                }
                _ => {}
            }

            output.push('\t');
            output.push_str(disasm.text());
            output.push_str("\r\n");
            self.listing.put(at, output);

            let next = loc.wrapping_add(disasm.length());

            if disasm.flow().is_block_end() {
                self.listing.append(at, &format!(";{:X}", next));
                break;
            }

            loc = next;
        }
    }

    fn note_reference(&mut self, reference: Reference) {
        let target = reference.target();

        self.enqueue(target);

        if reference.wants_lazy_label()
            && self.listing.contains(target)
            && !self.labeled.contains(&target)
        {
            // The target was already decoded as part of an earlier block;
            // retrofit its fragment with a label.
            let header = format!("Label{:X}: ;{}\n", target.rom_linear(), target);
            self.listing.prepend(target, &header);
            self.labeled.insert(target);
        }

        if reference.is_hook_candidate() && self.hook == Some(target.addr()) {
            if let Some(bank) = self.accum {
                self.mem.page(u16::from(bank));
            }
        }
    }
}
