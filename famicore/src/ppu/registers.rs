bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct PpuCtrl: u8 {
        const NAME_TABLE_X    = 0b00000001;
        const NAME_TABLE_Y    = 0b00000010;
        const VRAM_ADDR_INC   = 0b00000100;
        const SPR_TABLE_ADDR  = 0b00001000;
        const BG_TABLE_ADDR   = 0b00010000;
        const SPR_SIZE        = 0b00100000;
        const MASTER_SELECT   = 0b01000000;
        const NMI_ENABLED     = 0b10000000;
    }

    #[derive(Debug, Clone, Copy)]
    pub struct PpuMask: u8 {
        const GREYSCALE_ON  = 0b00000001;
        const SHOW_BG_LEFT  = 0b00000010;
        const SHOW_SPR_LEFT = 0b00000100;
        const SHOW_BG       = 0b00001000;
        const SHOW_SPR      = 0b00010000;
        const EMP_RED       = 0b00100000;
        const EMP_GREEN     = 0b01000000;
        const EMP_BLUE      = 0b10000000;
    }

    #[derive(Debug, Clone, Copy)]
    pub struct PpuStatus: u8 {
        const SPR_OVERFLOW = 0b00100000;
        const SPR_0_HIT    = 0b01000000;
        const IN_VBLANK    = 0b10000000;
    }
}

#[allow(dead_code)]
impl PpuCtrl {
    #[inline]
    pub fn name_table_x(&self) -> bool {
        self.contains(PpuCtrl::NAME_TABLE_X)
    }

    #[inline]
    pub fn name_table_y(&self) -> bool {
        self.contains(PpuCtrl::NAME_TABLE_Y)
    }

    #[inline]
    pub fn vram_addr_inc(&self) -> u16 {
        if self.contains(PpuCtrl::VRAM_ADDR_INC) {
            32
        } else {
            1
        }
    }

    #[inline]
    pub fn spr_table_addr(&self) -> usize {
        (self.contains(PpuCtrl::SPR_TABLE_ADDR) as usize) << 12
    }

    #[inline]
    pub fn bg_table_addr(&self) -> usize {
        (self.contains(PpuCtrl::BG_TABLE_ADDR) as usize) << 12
    }

    #[inline]
    pub fn spr_height(&self) -> usize {
        if self.contains(PpuCtrl::SPR_SIZE) {
            16
        } else {
            8
        }
    }

    #[inline]
    pub fn master_select(&self) -> bool {
        self.contains(PpuCtrl::MASTER_SELECT)
    }

    #[inline]
    pub fn nmi_enabled(&self) -> bool {
        self.contains(PpuCtrl::NMI_ENABLED)
    }
}

#[allow(dead_code)]
impl PpuMask {
    #[inline]
    pub fn greyscale_on(&self) -> bool {
        self.contains(PpuMask::GREYSCALE_ON)
    }

    #[inline]
    pub fn show_bg_left(&self) -> bool {
        self.contains(PpuMask::SHOW_BG_LEFT)
    }

    #[inline]
    pub fn show_spr_left(&self) -> bool {
        self.contains(PpuMask::SHOW_SPR_LEFT)
    }

    #[inline]
    pub fn show_bg(&self) -> bool {
        self.contains(PpuMask::SHOW_BG)
    }

    #[inline]
    pub fn show_spr(&self) -> bool {
        self.contains(PpuMask::SHOW_SPR)
    }
}

#[allow(dead_code)]
impl PpuStatus {
    #[inline]
    pub fn spr_0_hit(&self) -> bool {
        self.contains(PpuStatus::SPR_0_HIT)
    }

    #[inline]
    pub fn in_vblank(&self) -> bool {
        self.contains(PpuStatus::IN_VBLANK)
    }
}
