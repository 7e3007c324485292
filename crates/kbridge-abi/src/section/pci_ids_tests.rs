use super::BinarySection;
use super::pci_ids::{PCI_IDS, getPcieIds};

// Stand-in for the table the build step links in.
core::arch::global_asm!(
    ".pushsection .rodata.pcieids, \"a\"",
    ".globl pcieids_start",
    ".globl pcieids_end",
    "pcieids_start:",
    ".ascii \"8086  Intel Corporation\\n\\t1237  440FX\\n\"",
    "pcieids_end:",
    ".popsection",
);

const TABLE: &[u8] = b"8086  Intel Corporation\n\t1237  440FX\n";

#[test]
fn get_pcie_ids_describes_table() {
    let ptr = getPcieIds();
    // SAFETY: the slot is laid out as a BinarySection and lives forever; no
    // other test publishes into it.
    let section: BinarySection = unsafe { ptr.read() };

    assert_eq!(section.size, TABLE.len() as u64);
    assert_eq!(section, PCI_IDS.resolve());
    // SAFETY: the markers delimit the immutable table above.
    assert_eq!(unsafe { section.as_bytes() }, TABLE);

    assert_eq!(getPcieIds(), ptr);
}
