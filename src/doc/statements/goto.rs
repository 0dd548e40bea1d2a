/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to the specified label.

## Remarks
The label may be declared before or after the `GOTO`. If it is never
declared an `UNDEFINED LABEL` error occurs when compilation finishes.

## Example
```text
GOTO done
PRINT "THIS WILL NOT PRINT"
LABEL done
PRINT "THIS WILL PRINT"
```

*/
